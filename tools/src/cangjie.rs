//! `improve_cangjie5`: for every key starting with `x`, demote entries that
//! type the same character without the `x` (or with one extra letter).

use crate::output::write_atomic;
use anyhow::{Context, Result};
use clap::Parser;
use libtable_core::{DemotionRule, PriorityAdjuster, TableFile};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "improve_cangjie5",
    about = "Demote unmarked duplicates of x-prefixed entries in the cangjie5.txt table"
)]
pub struct Args {
    /// Input file
    #[arg(short = 'i', long = "inputfilename", default_value = "cangjie5.txt")]
    pub input: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "outputfilename", default_value = "cangjie5.txt.new")]
    pub output: PathBuf,

    /// TOML file overriding the demotion rule (marker, weight, key length, alphabet)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Print debugging output
    #[arg(short = 'd', long)]
    pub debug: bool,
}

/// What a run changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub entries: usize,
    pub demoted: usize,
}

pub fn run(args: &Args) -> Result<Summary> {
    let rule = match &args.config {
        Some(path) => DemotionRule::load_toml(path)?,
        None => DemotionRule::default(),
    };
    let mut file = TableFile::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let demoted = PriorityAdjuster::new(rule).adjust(&mut file.table);
    info!("{} of {} entries demoted", demoted, file.table.len());

    write_atomic(&args.output, &file.to_text())?;
    Ok(Summary {
        entries: file.table.len(),
        demoted,
    })
}
