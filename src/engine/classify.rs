//! Workload profile classification.

use log::debug;

use crate::types::{Profile, Workload};
use crate::utils::config::ProfileThresholds;

/// Classify a workload into a [`Profile`]. Rules are checked top to bottom
/// and the first hit wins:
///
/// 1. exactly one file → single-file (even under high latency)
/// 2. known latency over the threshold → high-latency
/// 3. small average, many files → ultra-fast
/// 4. large average → large-files
/// 5. small batch (few bytes, few files) → low-latency
/// 6. anything else → balanced
pub fn classify(workload: &Workload) -> Profile {
    let profile = classify_inner(workload);
    debug!(
        "Profile {} for {} files / {} bytes (avg {})",
        profile.as_str(),
        workload.file_count,
        workload.total_bytes,
        workload.avg_file_size()
    );
    profile
}

fn classify_inner(workload: &Workload) -> Profile {
    if workload.file_count == 1 {
        return Profile::SingleFile;
    }
    if let Some(ms) = workload.latency_ms
        && ms > ProfileThresholds::HIGH_LATENCY_MS
    {
        return Profile::HighLatency;
    }

    let avg = workload.avg_file_size();
    if avg < ProfileThresholds::SMALL_FILE_AVG
        && workload.file_count > ProfileThresholds::MANY_FILES_MIN
    {
        return Profile::UltraFast;
    }
    if avg > ProfileThresholds::LARGE_FILE_AVG {
        return Profile::LargeFiles;
    }
    if workload.total_bytes < ProfileThresholds::SMALL_BATCH_BYTES
        && workload.file_count < ProfileThresholds::SMALL_BATCH_FILES
    {
        return Profile::LowLatency;
    }
    Profile::Balanced
}
