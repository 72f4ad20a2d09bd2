//! Run configuration passed into the pipeline entry point.

use std::path::PathBuf;

/// Flows below this many bytes (100 KiB) count as "small" by default.
pub const DEFAULT_SMALL_CUTOFF: u64 = 100 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for `*.log` files.
    pub log_dir: PathBuf,

    /// Directory for CSV tables and charts, created if absent.
    pub out_dir: PathBuf,

    /// Size threshold separating small from large flows.
    pub small_cutoff: u64,
}
