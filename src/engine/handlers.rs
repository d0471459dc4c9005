//! CLI command handler: derive a plan and print it.

use anyhow::Result;
use log::debug;

use crate::engine::arg_parser::Cli;
use crate::engine::args::build_args;
use crate::optimize;
use crate::provider::ProviderRegistry;
use crate::types::{Plan, Workload};
use crate::utils::{Colors, setup_logging};

fn setup_workload(cli: &Cli) -> Workload {
    Workload {
        provider: cli.provider.to_lowercase(),
        file_count: cli.files,
        total_bytes: cli.bytes,
        is_download: cli.download,
        latency_ms: cli.latency_ms,
    }
}

fn registry_for(cli: &Cli) -> Result<ProviderRegistry> {
    match &cli.registry {
        Some(path) => {
            debug!("Loading registry overrides from {}", path.display());
            ProviderRegistry::load(path)
        }
        None => Ok(ProviderRegistry::default()),
    }
}

/// Derive the plan for the CLI's workload and print it in the requested
/// form: human summary (default), JSON, or an rclone argument vector.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let registry = registry_for(cli)?;
    let workload = setup_workload(cli);
    let plan = optimize(&workload, &registry);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else if cli.rclone_args {
        println!("{}", build_args(&plan, &workload, &registry).join(" "));
    } else {
        print_plan(&plan);
    }
    Ok(())
}

/// Print plan summary
fn print_plan(plan: &Plan) {
    println!(
        "profile:   {}",
        Colors::colorize(Colors::PROFILE, plan.profile.as_str())
    );
    println!(
        "transfers: {}  checkers: {}",
        Colors::colorize(Colors::VALUE, &plan.transfers.to_string()),
        Colors::colorize(Colors::VALUE, &plan.checkers.to_string())
    );
    let chunk = plan.chunk_size.as_deref().unwrap_or("-");
    println!(
        "buffer:    {}  chunk: {}  streams: {}",
        Colors::colorize(Colors::VALUE, plan.buffer_size.as_str()),
        Colors::colorize(Colors::VALUE, chunk),
        Colors::colorize(Colors::VALUE, &plan.multi_thread_streams.to_string())
    );
    println!("stats:     every {}", plan.progress_interval);
    if !plan.flags.is_empty() {
        println!(
            "flags:     {}",
            Colors::colorize(Colors::FLAG, &plan.flags.join(" "))
        );
    }
}
