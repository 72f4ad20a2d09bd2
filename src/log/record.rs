/// Size class of a flow. Small flows are latency-sensitive; large flows are
/// throughput-bound. The boundary is exclusive: a flow exactly at the cutoff
/// is large.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Small,
    Large,
}

/// One completed flow as reported by the simulator. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRecord {
    pub size_bytes: u64,
    /// Completion time in the log's native time unit.
    pub fct: f64,
    pub bucket: Bucket,
}

impl FlowRecord {
    pub fn new(size_bytes: u64, fct: f64, small_cutoff: u64) -> Self {
        let bucket = if size_bytes < small_cutoff {
            Bucket::Small
        } else {
            Bucket::Large
        };
        Self {
            size_bytes,
            fct,
            bucket,
        }
    }
}
