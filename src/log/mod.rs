//! Log ingestion: filename classification and flow-line extraction.

pub mod classify;
pub mod key;
pub mod parse;
pub mod record;

pub use classify::Classifier;
pub use key::{GroupKey, Policy, Workload};
pub use parse::LineParser;
pub use record::{Bucket, FlowRecord};
