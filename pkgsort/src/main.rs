use anyhow::Result;
use clap::Parser;
use std::io::Write;

use pkgsort::cli::Args;
use pkgsort::{RunOutcome, logging, run};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&args, &mut out)?;
    out.flush()?;

    if outcome == RunOutcome::Halted {
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}
