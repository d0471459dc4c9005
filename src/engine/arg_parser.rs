use clap::Parser;
use std::path::PathBuf;

struct DefaultArgs;

impl DefaultArgs {
    pub const FILES: u64 = 1;
    pub const BYTES: u64 = 0;
}

/// Transfer parameter optimizer for rclone-style sync engines.
#[derive(Clone, Parser)]
#[command(name = "xfertune")]
#[command(about = "Derive transfer tuning (parallelism, buffers, chunks, flags) for a workload.")]
pub struct Cli {
    /// Provider id, normalized lower-case (e.g. `s3`, `googledrive`, `dropbox`).
    #[arg(value_name = "PROVIDER")]
    pub provider: String,

    /// Number of files in the workload. 0 is valid (empty batch).
    #[arg(long, short = 'n', default_value_t = DefaultArgs::FILES)]
    pub files: u64,

    /// Total bytes to move.
    #[arg(long, short = 'b', default_value_t = DefaultArgs::BYTES)]
    pub bytes: u64,

    /// Data flows from the provider to the local side.
    #[arg(long, short = 'd')]
    pub download: bool,

    /// Estimated round-trip latency in milliseconds. Omit when unknown.
    #[arg(long, short = 'L', value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Provider policy override file (TOML). Its families are checked before
    /// the built-in table.
    #[arg(long, short = 'r', value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the plan as an rclone argument vector on one line.
    #[arg(long)]
    pub rclone_args: bool,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
