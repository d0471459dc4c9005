//! Progress reporting cadence.

use crate::types::Profile;
use crate::utils::config::PROGRESS_MANY_FILES;

/// Stats interval for a profile. Single large transfers want tight feedback;
/// huge small-file batches would spam at that rate.
pub fn progress_interval(profile: Profile, file_count: u64) -> &'static str {
    match profile {
        Profile::UltraFast => {
            if file_count > PROGRESS_MANY_FILES {
                "2s"
            } else {
                "1s"
            }
        }
        Profile::SingleFile | Profile::LargeFiles => "500ms",
        Profile::LowLatency => "2s",
        Profile::Balanced | Profile::HighLatency => "1s",
    }
}
