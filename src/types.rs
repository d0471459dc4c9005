//! Public types for the xfertune API.

use serde::Serialize;

/// Descriptor of an upcoming transfer workload. Fully owned by the caller;
/// the engine reads it once and returns a [`Plan`].
#[derive(Clone, Debug)]
pub struct Workload {
    /// Normalized lower-case provider id (e.g. `s3`, `googledrive`, `dropbox`).
    pub provider: String,
    /// Number of files to move. 0 is a valid degenerate case (empty batch).
    pub file_count: u64,
    /// Total bytes to move.
    pub total_bytes: u64,
    /// True when data flows from the provider to the local side.
    pub is_download: bool,
    /// Round-trip estimate in milliseconds. `None` means unknown; the engine
    /// then skips latency adjustment entirely.
    pub latency_ms: Option<u64>,
}

impl Workload {
    /// Average file size in bytes, floored. With no files, the total itself
    /// stands in for the average so threshold checks still apply.
    pub fn avg_file_size(&self) -> u64 {
        if self.file_count > 0 {
            self.total_bytes / self.file_count
        } else {
            self.total_bytes
        }
    }
}

/// Workload category chosen by the classifier. Drives every downstream
/// default. Exactly one is selected per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    SingleFile,
    UltraFast,
    Balanced,
    LargeFiles,
    LowLatency,
    HighLatency,
}

impl Profile {
    pub const fn as_str(self) -> &'static str {
        match self {
            Profile::SingleFile => "single-file",
            Profile::UltraFast => "ultra-fast",
            Profile::Balanced => "balanced",
            Profile::LargeFiles => "large-files",
            Profile::LowLatency => "low-latency",
            Profile::HighLatency => "high-latency",
        }
    }
}

/// Per-transfer I/O buffer size hint. Closed set; rclone accepts these
/// verbatim as `--buffer-size` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BufferSize {
    #[serde(rename = "8M")]
    M8,
    #[serde(rename = "16M")]
    M16,
    #[serde(rename = "32M")]
    M32,
    #[serde(rename = "64M")]
    M64,
    #[serde(rename = "128M")]
    M128,
}

impl BufferSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            BufferSize::M8 => "8M",
            BufferSize::M16 => "16M",
            BufferSize::M32 => "32M",
            BufferSize::M64 => "64M",
            BufferSize::M128 => "128M",
        }
    }

    /// One rung up the ladder. 8M is below the ladder and 128M is the top;
    /// both stay put.
    pub const fn step_up(self) -> BufferSize {
        match self {
            BufferSize::M16 => BufferSize::M32,
            BufferSize::M32 => BufferSize::M64,
            BufferSize::M64 => BufferSize::M128,
            other => other,
        }
    }
}

/// Derived transfer plan. Immutable; every field is a pure function of the
/// input [`Workload`] and the registry, so two calls with the same input
/// yield identical plans.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Max concurrent file transfer operations.
    pub transfers: u32,
    /// Max concurrent existence/metadata comparison operations.
    pub checkers: u32,
    pub buffer_size: BufferSize,
    /// Provider-preferred multipart chunk size (e.g. `"64M"`). `None` when
    /// the registry has no entry; the executor then uses its own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<String>,
    /// Parallel streams for a single large file. 0 = disabled.
    pub multi_thread_streams: u32,
    /// Progress reporting cadence (`"500ms"`, `"1s"`, `"2s"`).
    pub progress_interval: &'static str,
    /// Behavioral flags, in a fixed order.
    pub flags: Vec<String>,
    pub profile: Profile,
}
