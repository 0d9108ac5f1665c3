use anyhow::Result;
use clap::Parser;
use table_tools::jyutping::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    table_tools::logging::init(args.debug);
    run(&args)?;
    Ok(())
}
