//! SVG comparison charts, one per (workload, curve) pair with data.
//!
//! Each chart plots mean FCT against offered load (utilization x 100) with
//! one line per policy. A policy only gets points at the utilizations it has
//! data for; missing combinations stay gaps rather than zeros.

use crate::Result;
use crate::log::{Policy, Workload};
use crate::model::{AggregateRow, Curve};
use anyhow::anyhow;
use plotters::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (640, 480);

/// Offered load on the x axis is a whole percentage, so points line up with
/// the integer axis labels even for fractional utilizations.
fn load_pct(util: f64) -> f64 {
    (util * 100.0).round()
}

pub fn render_charts(rows: &[AggregateRow], out_dir: &Path) -> Result<()> {
    let workloads: BTreeSet<Workload> = rows.iter().map(|r| r.workload).collect();

    for &workload in &workloads {
        for curve in Curve::ALL {
            let mut series: Vec<(Policy, Vec<(f64, f64)>)> = Vec::new();
            for policy in [Policy::Ecmp, Policy::Conga] {
                let points: Vec<(f64, f64)> = rows
                    .iter()
                    .filter(|r| r.curve == curve && r.workload == workload && r.policy == policy)
                    .map(|r| (load_pct(r.util), r.mean_fct))
                    .collect();
                if !points.is_empty() {
                    series.push((policy, points));
                }
            }
            if series.is_empty() {
                continue;
            }

            let path = out_dir.join(format!(
                "{}_{}_fct.svg",
                workload.as_str(),
                curve.as_str()
            ));
            draw_chart(&path, workload, curve, &series)
                .map_err(|e| anyhow!("render chart {}: {}", path.display(), e))?;
        }
    }

    Ok(())
}

fn draw_chart(
    path: &Path,
    workload: Workload,
    curve: Curve,
    series: &[(Policy, Vec<(f64, f64)>)],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut y_max = 0.0f64;
    for (_, points) in series {
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }
    // Degenerate ranges (single utilization, or all-zero fct) still need a
    // drawable axis.
    if x_max - x_min < 1.0 {
        x_min -= 5.0;
        x_max += 5.0;
    }
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} workload - {} flows", workload.as_str(), curve.as_str()),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Offered load (%)")
        .y_desc("Average FCT (us)")
        .x_label_formatter(&|x| format!("{x:.0}"))
        .draw()?;

    for (policy, points) in series {
        let color = match policy {
            Policy::Ecmp => RED,
            Policy::Conga => BLUE,
        };
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(policy.as_str().to_uppercase())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
