//! Mean flow-completion-time reporting for datacenter simulation logs.
//!
//! Scans a directory of `*.log` simulator outputs, classifies each file into
//! (routing policy, traffic workload, offered load) from its name, extracts
//! per-flow (size, fct) pairs from the flow lines, and emits per-curve CSV
//! tables plus SVG comparison charts (one line per policy).

pub mod config;
pub mod log;
pub mod model;
pub mod pipeline;
pub mod render;

pub type Result<T> = anyhow::Result<T>;
