//! Base configuration table: profile → starting parameter tuple.

use crate::provider::Capability;
use crate::types::{BufferSize, Profile};
use crate::utils::config::StreamCaps;

/// Intermediate parameter tuple, refined stage by stage. Never leaves the
/// crate; callers only see the assembled [`crate::Plan`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct BaseConfig {
    pub transfers: u32,
    pub checkers: u32,
    pub buffer_size: BufferSize,
    /// 0 = multi-thread transfer disabled.
    pub multi_thread_streams: u32,
}

/// Starting tuple for a profile. Only the single-file row consults the
/// provider: multi-thread streams are pointless on a backend that serializes
/// ranged reads.
pub(crate) fn base_config(profile: Profile, capability: Capability) -> BaseConfig {
    match profile {
        Profile::UltraFast => BaseConfig {
            transfers: 32,
            checkers: 64,
            buffer_size: BufferSize::M16,
            multi_thread_streams: 0,
        },
        Profile::Balanced => BaseConfig {
            transfers: 16,
            checkers: 32,
            buffer_size: BufferSize::M32,
            multi_thread_streams: 0,
        },
        Profile::LargeFiles => BaseConfig {
            transfers: 8,
            checkers: 16,
            buffer_size: BufferSize::M128,
            multi_thread_streams: 0,
        },
        Profile::SingleFile => BaseConfig {
            transfers: 1,
            checkers: 8,
            buffer_size: BufferSize::M128,
            multi_thread_streams: if capability.supports_multi_thread() {
                StreamCaps::SINGLE_FILE_STREAMS
            } else {
                0
            },
        },
        Profile::LowLatency => BaseConfig {
            transfers: 4,
            checkers: 8,
            buffer_size: BufferSize::M16,
            multi_thread_streams: 0,
        },
        Profile::HighLatency => BaseConfig {
            transfers: 24,
            checkers: 48,
            buffer_size: BufferSize::M64,
            multi_thread_streams: 0,
        },
    }
}
