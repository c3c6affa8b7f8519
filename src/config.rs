//! Pipeline Configuration
//! Every constant the chart pipeline runs with, gathered in one place.

use serde::Serialize;
use std::path::PathBuf;

/// World Bank total population export.
pub const DEFAULT_INPUT_PATH: &str = "API_SP.POP.TOTL_DS2_en_excel_v2_76243.xls";
pub const BAR_CHART_FILE: &str = "age_distribution_bar_chart.png";
pub const HISTOGRAM_FILE: &str = "age_distribution_histogram.png";

/// Settings for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub sheet_name: String,
    /// Metadata rows above the header row.
    pub header_offset: usize,
    pub country: String,
    pub year: u32,
    pub population_size: usize,
    pub seed: u64,
    pub std_dev: f64,
    /// Midpoint used for the open-ended last age group ("65+").
    pub open_group_midpoint: f64,
    pub histogram_bins: usize,
    pub bar_chart_path: PathBuf,
    pub histogram_path: PathBuf,
    /// Open written charts in the system viewer.
    pub display: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            sheet_name: "Data".to_string(),
            header_offset: 3,
            country: "India".to_string(),
            year: 2020,
            population_size: 10_000,
            seed: 42,
            std_dev: 3.0,
            open_group_midpoint: 72.0,
            histogram_bins: 20,
            bar_chart_path: PathBuf::from(BAR_CHART_FILE),
            histogram_path: PathBuf::from(HISTOGRAM_FILE),
            display: true,
        }
    }
}

impl PipelineConfig {
    /// Same settings with every file resolved under `dir` and display off.
    #[cfg(test)]
    pub fn in_dir(dir: &std::path::Path) -> Self {
        let defaults = Self::default();
        Self {
            input_path: dir.join(&defaults.input_path),
            bar_chart_path: dir.join(&defaults.bar_chart_path),
            histogram_path: dir.join(&defaults.histogram_path),
            display: false,
            ..defaults
        }
    }

    /// Title suffix, e.g. "India's Population (2020)".
    pub fn subject(&self) -> String {
        format!("{}'s Population ({})", self.country, self.year)
    }
}
