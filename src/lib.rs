//! Xfertune: transfer parameter optimization for rclone-style sync engines.
//!
//! A pure, stateless decision pipeline: describe an upcoming workload
//! ([`Workload`]) and get back the full tuning set the transfer executor
//! should use ([`Plan`]). The engine performs no I/O and holds no state;
//! identical inputs always produce identical plans.

pub mod engine;
pub mod provider;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;

use crate::provider::ProviderRegistry;

/// Result alias used by the fallible edges (registry loading, CLI). The
/// engine itself is total and never fails.
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: derive the transfer plan for `workload` under the
/// given provider `registry`.
///
/// The stages run in a fixed order: classify, base table, provider caps,
/// volume corrections, latency scaling; chunk size, progress cadence, and
/// flags are computed from the original inputs alongside. That order is a
/// behavioral contract, not an implementation detail; the volume pass reads
/// the buffer value left by the provider pass.
pub fn optimize(workload: &Workload, registry: &ProviderRegistry) -> Plan {
    let capability = provider::capability_for_provider(&workload.provider);
    let profile = engine::classify(workload);

    let base = engine::base::base_config(profile, capability);
    let base = engine::adjust::apply_provider_caps(base, &workload.provider, registry);
    let base = engine::adjust::adjust_for_volume(base, workload);
    let base = engine::adjust::adjust_for_latency(base, workload.latency_ms);

    let plan = Plan {
        transfers: base.transfers,
        checkers: base.checkers,
        buffer_size: base.buffer_size,
        chunk_size: engine::chunk_size_for(workload, registry),
        multi_thread_streams: base.multi_thread_streams,
        progress_interval: engine::progress_interval(profile, workload.file_count),
        flags: engine::compose_flags(workload, profile, registry),
        profile,
    };
    debug!("{} PLAN:{:#?}", env!("CARGO_PKG_NAME").to_uppercase(), plan);
    plan
}

/// [`optimize`] against the built-in provider table. Convenience for callers
/// with no policy overrides.
pub fn optimize_with_defaults(workload: &Workload) -> Plan {
    optimize(workload, &ProviderRegistry::default())
}
