//! Age Chart - India population age distribution charts
//!
//! Loads the World Bank population spreadsheet, then renders a bar chart of
//! the age-group shares and a histogram of simulated individual ages.

mod app;
mod charts;
mod config;
mod data;
mod stats;

use app::{AgeChartApp, RunOutcome};
use config::PipelineConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PipelineConfig::default();
    let config_json = serde_json::to_string(&config)?;
    tracing::debug!(config = %config_json, "resolved configuration");

    match AgeChartApp::new(config).run()? {
        RunOutcome::LoadFailed(err) => {
            // Reported, not propagated: the run simply ends here
            println!("{}", err);
        }
        RunOutcome::Completed(report) => {
            tracing::info!(
                population = ?report.population,
                samples = report.sample_len,
                mean_age = report.summary.mean,
                binned = report.histogram.total(),
                bins = report.histogram.bin_count(),
                charts = report.written.len(),
                "done"
            );
        }
    }

    Ok(())
}
