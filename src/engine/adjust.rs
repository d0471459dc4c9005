//! Ordered adjustment passes over the base tuple.
//!
//! Order is a contract: provider caps, then volume corrections, then latency
//! scaling. The volume pass reads the buffer value the provider pass left
//! behind, not the base table's.

use log::debug;

use crate::engine::base::BaseConfig;
use crate::provider::ProviderRegistry;
use crate::types::{BufferSize, Workload};
use crate::utils::config::{BufferRules, DefaultCaps};

/// Clamp transfers/checkers to the provider family's caps. Object-storage
/// families carry no caps and pass through; unrecognized providers get the
/// conservative default clamp. Buffer and streams are untouched here.
pub(crate) fn apply_provider_caps(
    cfg: BaseConfig,
    provider: &str,
    registry: &ProviderRegistry,
) -> BaseConfig {
    let (max_transfers, max_checkers) = match registry.family_for(provider) {
        Some(f) => (f.max_transfers, f.max_checkers),
        None => (Some(DefaultCaps::TRANSFERS), Some(DefaultCaps::CHECKERS)),
    };
    let transfers = cap(cfg.transfers, max_transfers);
    let checkers = cap(cfg.checkers, max_checkers);
    if transfers != cfg.transfers || checkers != cfg.checkers {
        debug!(
            "Provider {:?} caps: transfers {} -> {}, checkers {} -> {}",
            provider, cfg.transfers, transfers, cfg.checkers, checkers
        );
    }
    BaseConfig {
        transfers,
        checkers,
        ..cfg
    }
}

fn cap(value: u32, max: Option<u32>) -> u32 {
    match max {
        Some(max) => value.min(max),
        None => value,
    }
}

/// Volume corrections to the buffer. Two rules in sequence over the current
/// value: huge totals bump small/mid buffers up, then a tiny average forces
/// the minimum regardless of what the first rule did.
pub(crate) fn adjust_for_volume(cfg: BaseConfig, workload: &Workload) -> BaseConfig {
    let mut buffer = cfg.buffer_size;
    if workload.total_bytes > BufferRules::HUGE_TOTAL_BYTES {
        buffer = match buffer {
            BufferSize::M16 => BufferSize::M64,
            BufferSize::M32 => BufferSize::M128,
            other => other,
        };
    }
    if workload.avg_file_size() < BufferRules::TINY_AVG_BYTES {
        buffer = BufferSize::M8;
    }
    BaseConfig {
        buffer_size: buffer,
        ..cfg
    }
}

/// Latency scaling. Runs only when an estimate exists; past the threshold,
/// parallelism grows 1.5x (floored) and the buffer steps up one rung to keep
/// the pipe full across the longer round trip.
pub(crate) fn adjust_for_latency(cfg: BaseConfig, latency_ms: Option<u64>) -> BaseConfig {
    match latency_ms {
        Some(ms) if ms > BufferRules::LATENCY_SCALE_MS => {
            debug!("Latency {} ms: scaling parallelism 1.5x", ms);
            BaseConfig {
                transfers: cfg.transfers + cfg.transfers / 2,
                checkers: cfg.checkers + cfg.checkers / 2,
                buffer_size: cfg.buffer_size.step_up(),
                ..cfg
            }
        }
        _ => cfg,
    }
}
