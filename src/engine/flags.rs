//! Behavioral flag composition.

use crate::provider::ProviderRegistry;
use crate::types::{Profile, Workload};

pub const FAST_LIST: &str = "--fast-list";
/// Trust the source side; skip the destination existence check.
pub const NO_CHECK_DEST: &str = "--no-check-dest";
pub const SIZE_ONLY: &str = "--size-only";
pub const NO_UPDATE_MODTIME: &str = "--no-update-modtime";
pub const PARTIAL: &str = "--partial";
pub const RETRIES: &str = "--retries=5";
pub const LOW_LEVEL_RETRIES: &str = "--low-level-retries=20";

/// Compose the flag list. Order is part of the contract: provider flags
/// first, then direction, then profile extras.
pub fn compose_flags(
    workload: &Workload,
    profile: Profile,
    registry: &ProviderRegistry,
) -> Vec<String> {
    let mut flags = Vec::new();
    if registry.fast_list(&workload.provider) {
        flags.push(FAST_LIST.to_string());
    }
    if workload.is_download {
        flags.push(NO_CHECK_DEST.to_string());
    }
    match profile {
        Profile::UltraFast => {
            flags.push(SIZE_ONLY.to_string());
            flags.push(NO_UPDATE_MODTIME.to_string());
        }
        Profile::SingleFile => flags.push(PARTIAL.to_string()),
        Profile::HighLatency => {
            flags.push(RETRIES.to_string());
            flags.push(LOW_LEVEL_RETRIES.to_string());
        }
        Profile::Balanced | Profile::LargeFiles | Profile::LowLatency => {}
    }
    flags
}
