//! Derive a [`GroupKey`] from a log file's name.
//!
//! The canonical grammar is `{policy}_{workload}_U{util}.log`, e.g.
//! `conga_datamining_U0.8.log`. Names that miss it fall back to substring
//! search: any `conga` means Conga (else Ecmp), the earliest workload keyword
//! wins (none at all means `Workload::Unknown`), and the first `u<number>`
//! token supplies the utilization. A missing or malformed utilization token
//! defaults to 0.0 rather than failing the run.

use crate::Result;
use crate::log::key::{GroupKey, Policy, Workload};
use ordered_float::OrderedFloat;
use regex::Regex;
use std::path::Path;

pub struct Classifier {
    strict: Regex,
    util: Regex,
}

impl Classifier {
    pub fn new() -> Result<Self> {
        let strict = Regex::new(
            r"^(ecmp|conga)_(uniform|pareto|enterprise|datamining)_[uU]([0-9.]+)\.log$",
        )?;
        // `_` is a word character, so `\b` would never fire after the
        // underscore delimiters these names actually use; accept any
        // non-alphanumeric lead-in instead.
        let util = Regex::new(r"(?:^|[^0-9a-z])u([0-9]+(?:\.[0-9]+)?)")?;
        Ok(Self { strict, util })
    }

    /// Classify a path, or `None` if the file is not a `.log` file (or its
    /// name is not valid UTF-8). Pure function of the path string. The
    /// pipeline already pre-filters on the `.log` extension; the check here
    /// keeps this callable on arbitrary paths.
    pub fn classify(&self, path: &Path) -> Option<GroupKey> {
        if path.extension().and_then(|e| e.to_str()) != Some("log") {
            return None;
        }
        let name = path.file_name()?.to_str()?;

        if let Some(caps) = self.strict.captures(name) {
            let policy = match &caps[1] {
                "conga" => Policy::Conga,
                _ => Policy::Ecmp,
            };
            let workload = match &caps[2] {
                "uniform" => Workload::Uniform,
                "pareto" => Workload::Pareto,
                "enterprise" => Workload::Enterprise,
                _ => Workload::Datamining,
            };
            let util = caps[3].parse::<f64>().unwrap_or(0.0);
            return Some(GroupKey {
                policy,
                workload,
                util: OrderedFloat(util),
            });
        }

        // Loose fallback for names outside the canonical grammar.
        let lower = name.to_ascii_lowercase();
        let policy = if lower.contains("conga") {
            Policy::Conga
        } else {
            Policy::Ecmp
        };
        let workload = detect_workload(&lower);
        let util = self
            .util
            .captures(&lower)
            .and_then(|caps| caps[1].parse::<f64>().ok())
            .unwrap_or(0.0);

        Some(GroupKey {
            policy,
            workload,
            util: OrderedFloat(util),
        })
    }
}

/// Earliest workload keyword in the (lowercased) name wins.
fn detect_workload(name: &str) -> Workload {
    const KEYWORDS: [(&str, Workload); 4] = [
        ("uniform", Workload::Uniform),
        ("pareto", Workload::Pareto),
        ("enterprise", Workload::Enterprise),
        ("datamining", Workload::Datamining),
    ];

    KEYWORDS
        .iter()
        .filter_map(|&(kw, workload)| name.find(kw).map(|pos| (pos, workload)))
        .min_by_key(|&(pos, _)| pos)
        .map(|(_, workload)| workload)
        .unwrap_or(Workload::Unknown)
}
