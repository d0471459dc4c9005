//! Xfertune CLI: print the derived transfer plan for a workload.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use xfertune::engine::Cli;
use xfertune::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
