//! Multipart chunk-size selection.

use crate::provider::ProviderRegistry;
use crate::types::Workload;
use crate::utils::config::ChunkRules;

/// Preferred chunk size for this workload, from the provider registry.
/// Computed from the original inputs, never from the adjusted tuple.
///
/// Providers without a registry entry yield `None` (no default is invented).
/// Small-average workloads shrink the known sizes one rung; sizes outside
/// the shrink map pass through even then.
pub fn chunk_size_for(workload: &Workload, registry: &ProviderRegistry) -> Option<String> {
    let preferred = registry.chunk_size_for(&workload.provider)?;
    let chosen = if workload.avg_file_size() < ChunkRules::SHRINK_AVG_BYTES {
        shrink(preferred)
    } else {
        preferred
    };
    Some(chosen.to_string())
}

fn shrink(size: &str) -> &str {
    match size {
        "64M" => "16M",
        "48M" => "12M",
        "32M" => "8M",
        other => other,
    }
}
