use clap::Parser;

use potterplan::{init_logging, run, Args};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    let report = run(&args)?;
    print!("{}", report);
    Ok(())
}
