//! Grouping key derived from a log file's name.
//!
//! Example file name: ecmp_uniform_U0.5.log  =>  (Ecmp, Uniform, 0.5)
//!
//! Every flow line inside one file shares the file's key, and two files that
//! classify to the same key merge into one group.

use ordered_float::OrderedFloat;
use serde::Serialize;

/// Routing / load-balancing scheme under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Ecmp,
    Conga,
}

impl Policy {
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::Ecmp => "ecmp",
            Policy::Conga => "conga",
        }
    }
}

/// Traffic size-distribution model used to generate flows.
///
/// `Unknown` keeps files whose name carries no recognized workload keyword:
/// their flows still aggregate into their own group instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    Uniform,
    Pareto,
    Enterprise,
    Datamining,
    Unknown,
}

impl Workload {
    pub fn as_str(self) -> &'static str {
        match self {
            Workload::Uniform => "uniform",
            Workload::Pareto => "pareto",
            Workload::Enterprise => "enterprise",
            Workload::Datamining => "datamining",
            Workload::Unknown => "unknown",
        }
    }
}

/// Identity of one simulation run's contribution.
///
/// Utilization compares exactly as parsed (no rounding or binning), so two
/// files declaring the same offered load always land in the same group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub policy: Policy,
    pub workload: Workload,
    pub util: OrderedFloat<f64>,
}
