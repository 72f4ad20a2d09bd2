//! CSV tables, one file per curve.

use crate::Result;
use crate::model::{AggregateRow, Curve};
use anyhow::Context;
use std::path::Path;

/// Write `mean_fct_{all,small,large}.csv` into `out_dir`.
///
/// Column order is fixed (policy, workload, util, mean_fct, curve) and rows
/// keep the aggregator's sort, so re-running on the same input produces
/// byte-identical files. A curve with no rows still gets its file, header
/// only.
pub fn write_tables(rows: &[AggregateRow], out_dir: &Path) -> Result<()> {
    for curve in Curve::ALL {
        let path = out_dir.join(format!("mean_fct_{}.csv", curve.as_str()));
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .with_context(|| format!("create table {}", path.display()))?;

        writer
            .write_record(["policy", "workload", "util", "mean_fct", "curve"])
            .with_context(|| format!("write table {}", path.display()))?;

        for row in rows.iter().filter(|r| r.curve == curve) {
            writer
                .serialize(row)
                .with_context(|| format!("write table {}", path.display()))?;
        }

        writer
            .flush()
            .with_context(|| format!("flush table {}", path.display()))?;
    }

    Ok(())
}
