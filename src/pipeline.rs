//! The batch pipeline: scan a log directory, classify and parse every file,
//! aggregate, and emit tables and charts.

use crate::Result;
use crate::config::Config;
use crate::log::{Classifier, FlowRecord, LineParser};
use crate::model::{self, FlowStore};
use crate::render;
use anyhow::{Context, bail};
use std::fs;
use std::path::PathBuf;

/// What one run touched, for the final confirmation message.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub log_files: usize,
    pub flow_records: usize,
    pub rows: usize,
}

/// Run the whole pipeline once. Fatal only when zero flow records parse from
/// the entire directory; in that case no output artifact is written.
pub fn run(config: &Config) -> Result<RunSummary> {
    let classifier = Classifier::new()?;
    let parser = LineParser::new()?;

    // Snapshot the directory up front; sorted so diagnostics come out in a
    // stable order (the aggregates are order-independent anyway).
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(&config.log_dir)
        .with_context(|| format!("read log directory {}", config.log_dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("log") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut store = FlowStore::new();
    let mut log_files = 0usize;
    for path in &paths {
        let key = match classifier.classify(path) {
            Some(key) => key,
            None => {
                eprintln!("WARN: skipping log file with unusable name: {}", path.display());
                continue;
            }
        };
        log_files += 1;

        // Lossy decode: flow lines are ASCII, and stray bytes elsewhere must
        // not fail the file.
        let bytes =
            fs::read(path).with_context(|| format!("read log file {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        for line in text.lines() {
            if let Some((size, fct)) = parser.parse(line) {
                store.push(key, FlowRecord::new(size, fct, config.small_cutoff));
            }
        }
    }

    if store.is_empty() {
        bail!(
            "no flow lines parsed from {} ({} .log files examined); check the directory and the filename pattern",
            config.log_dir.display(),
            paths.len()
        );
    }

    let flow_records = store.record_count();
    let rows = model::aggregate(&store);

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("create output directory {}", config.out_dir.display()))?;
    render::write_tables(&rows, &config.out_dir)?;
    render::render_charts(&rows, &config.out_dir)?;

    Ok(RunSummary {
        log_files,
        flow_records,
        rows: rows.len(),
    })
}
