//! Application configuration constants.
//! Tuning and thresholds in one place.

// ---- Profile classification ----

/// Thresholds for the profile classifier. Rules fire in priority order, so a
/// workload that crosses several thresholds still gets exactly one profile.
pub struct ProfileThresholds;

impl ProfileThresholds {
    /// Latency above this (ms) classifies as high-latency.
    pub const HIGH_LATENCY_MS: u64 = 100;
    /// Average file size below this (bytes) counts as "small files".
    pub const SMALL_FILE_AVG: u64 = 1_000_000;
    /// Small-file workloads need more than this many files to go ultra-fast.
    pub const MANY_FILES_MIN: u64 = 50;
    /// Average file size above this (bytes) counts as "large files".
    pub const LARGE_FILE_AVG: u64 = 100_000_000;
    /// Total bytes below this qualifies for the low-latency fast path.
    pub const SMALL_BATCH_BYTES: u64 = 10_000_000;
    /// File count below this qualifies for the low-latency fast path.
    pub const SMALL_BATCH_FILES: u64 = 10;
}

// ---- Multi-thread streams ----

/// Per-capability stream limits for multi-threaded single-file transfers.
pub struct StreamCaps;

impl StreamCaps {
    /// Object-storage class backends tolerate heavy parallelism.
    pub const FULL: u32 = 16;
    /// Consumer drives throttle aggressive parallel range requests.
    pub const LIMITED: u32 = 4;
    /// Single stream only.
    pub const UNSUPPORTED: u32 = 1;
    /// Streams requested for a single-file workload on a capable backend.
    pub const SINGLE_FILE_STREAMS: u32 = 16;
}

// ---- Buffer adjustment ----

/// Buffer-size correction thresholds (volume and latency passes).
pub struct BufferRules;

impl BufferRules {
    /// Total bytes above this (10 GB) bumps small/mid buffers up.
    pub const HUGE_TOTAL_BYTES: u64 = 10_000_000_000;
    /// Average file size below this forces the minimum buffer; tiny files
    /// never fill a large buffer before the transfer completes.
    pub const TINY_AVG_BYTES: u64 = 100_000;
    /// Latency above this (ms) scales parallelism by 1.5 and steps the
    /// buffer up one rung.
    pub const LATENCY_SCALE_MS: u64 = 200;
}

// ---- Chunk sizes ----

/// Small-file correction for provider-preferred chunk sizes.
pub struct ChunkRules;

impl ChunkRules {
    /// Average file size below this (bytes) shrinks the preferred chunk.
    pub const SHRINK_AVG_BYTES: u64 = 5_000_000;
}

// ---- Progress reporting ----

/// File count above which ultra-fast workloads report less often.
pub const PROGRESS_MANY_FILES: u64 = 1000;

// ---- Provider fallbacks ----

/// Clamp applied when the provider matches no registry family. Conservative:
/// matches the balanced base so unknown backends are never over-driven.
pub struct DefaultCaps;

impl DefaultCaps {
    pub const TRANSFERS: u32 = 16;
    pub const CHECKERS: u32 = 32;
}

// ---- Argument building ----

/// File size cutoff above which multi-thread streams kick in. Passed through
/// to the executor whenever streams are enabled.
pub const MULTI_THREAD_CUTOFF: &str = "100M";
