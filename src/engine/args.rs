//! Render a plan as an rclone-style argument vector.

use crate::provider::ProviderRegistry;
use crate::types::{Plan, Workload};
use crate::utils::config::MULTI_THREAD_CUTOFF;

/// Argument vector for a plan: parallelism, buffer, multi-thread settings
/// when enabled, the backend-native chunk flag when the registry knows one,
/// the behavioral flags, and the stats cadence last.
pub fn build_args(plan: &Plan, workload: &Workload, registry: &ProviderRegistry) -> Vec<String> {
    let mut args = vec![
        "--transfers".to_string(),
        plan.transfers.to_string(),
        "--checkers".to_string(),
        plan.checkers.to_string(),
        "--buffer-size".to_string(),
        plan.buffer_size.as_str().to_string(),
    ];
    if plan.multi_thread_streams > 0 {
        args.push("--multi-thread-streams".to_string());
        args.push(plan.multi_thread_streams.to_string());
        args.push("--multi-thread-cutoff".to_string());
        args.push(MULTI_THREAD_CUTOFF.to_string());
    }
    if let Some(ref chunk) = plan.chunk_size
        && let Some(flag) = registry.chunk_flag_for(&workload.provider)
    {
        args.push(format!("{flag}={chunk}"));
    }
    args.extend(plan.flags.iter().cloned());
    args.push("--stats".to_string());
    args.push(plan.progress_interval.to_string());
    args
}

/// Baseline arguments when no workload information is available.
pub fn default_args() -> Vec<String> {
    ["--transfers", "4", "--checkers", "16", "--buffer-size", "32M"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
