use clap::Parser;
use fct_report::Result;
use fct_report::config::{Config, DEFAULT_SMALL_CUTOFF};
use fct_report::pipeline;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fct-report")]
#[command(about = "Mean-FCT tables and comparison charts from simulation flow logs", long_about = None)]
struct Cli {
    /// Directory containing *.log simulator outputs.
    #[arg(default_value = "results")]
    log_dir: PathBuf,

    /// Directory for CSV tables and charts (created if absent).
    #[arg(default_value = "plots")]
    out_dir: PathBuf,

    /// Flow size in bytes below which a flow counts as "small".
    #[arg(long, default_value_t = DEFAULT_SMALL_CUTOFF)]
    small_cutoff: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        log_dir: cli.log_dir,
        out_dir: cli.out_dir,
        small_cutoff: cli.small_cutoff,
    };

    let summary = pipeline::run(&config)?;
    println!(
        "Done. {} rows from {} flow records in {} log files. Plots and CSVs in: {}",
        summary.rows,
        summary.flow_records,
        summary.log_files,
        config.out_dir.display()
    );

    Ok(())
}
