//! `remove_cjk_compatibility_ideographs`: drop every line of a file that
//! contains a CJK compatibility ideograph. The file is not parsed as a
//! table; header and footer lines are filtered the same way.

use crate::output::write_atomic;
use anyhow::{Context, Result};
use clap::Parser;
use libtable_core::{is_cjk_compatibility_ideograph, remove_lines_containing};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "remove_cjk_compatibility_ideographs",
    about = "Remove lines containing CJK COMPATIBILITY IDEOGRAPHs from a file"
)]
pub struct Args {
    /// Input file
    #[arg(short = 'i', long = "inputfilename", default_value = "wubi-haifeng86.UTF-8")]
    pub input: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "outputfilename", default_value = "wubi-haifeng86.UTF-8.new")]
    pub output: PathBuf,

    /// Print debugging output
    #[arg(short = 'd', long)]
    pub debug: bool,
}

/// Returns the number of removed lines.
pub fn run(args: &Args) -> Result<usize> {
    info!("input file={}", args.input.display());
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let (kept, removed) = remove_lines_containing(&text, is_cjk_compatibility_ideograph);
    info!("{} lines removed", removed);
    write_atomic(&args.output, &kept)?;
    Ok(removed)
}
