//! Age Chart pipeline
//! Load and clean the dataset, then sample ages and render both charts.

use crate::charts::{self, BarChartRenderer, HistogramRenderer};
use crate::config::PipelineConfig;
use crate::data::{AgeDistribution, DataLoader, DataProcessor, LoaderError, ProcessorError};
use crate::stats::{AgeSampler, Histogram, SampleSummary, StatsCalculator};
use anyhow::Context;
use polars::prelude::DataFrame;
use std::path::PathBuf;

/// Result of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Dataset value for the configured country and year, if present.
    pub population: Option<f64>,
    pub sample_len: usize,
    pub summary: SampleSummary,
    pub histogram: Histogram,
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunReport),
    /// The dataset could not be loaded; nothing was rendered.
    LoadFailed(LoaderError),
}

/// Simulated sample with its binning.
#[derive(Debug)]
pub struct Simulation {
    pub ages: Vec<f64>,
    pub histogram: Histogram,
    pub summary: SampleSummary,
}

pub struct AgeChartApp {
    config: PipelineConfig,
}

impl AgeChartApp {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline once.
    pub fn run(&self) -> anyhow::Result<RunOutcome> {
        let df = match self.load_dataset() {
            Ok(df) => df,
            Err(err) => return Ok(RunOutcome::LoadFailed(err)),
        };

        let population =
            match DataProcessor::country_population(&df, &self.config.country, self.config.year) {
                Ok(Some(value)) => {
                    tracing::info!(
                        country = %self.config.country,
                        year = self.config.year,
                        population = value,
                        "dataset population"
                    );
                    Some(value)
                }
                Ok(None) => {
                    tracing::warn!(
                        country = %self.config.country,
                        year = self.config.year,
                        "country/year not found in dataset"
                    );
                    None
                }
                Err(err) => {
                    tracing::warn!(error = %err, "population lookup failed");
                    None
                }
            };

        let dist = AgeDistribution::india_2020();
        tracing::debug!(
            groups = dist.len(),
            total = dist.total_percentage(),
            "age distribution table"
        );
        let subject = self.config.subject();
        let mut written = Vec::new();

        BarChartRenderer::render_to_file(&self.config.bar_chart_path, &dist, &subject)
            .context("failed to render bar chart")?;
        tracing::info!(path = %self.config.bar_chart_path.display(), "bar chart written");
        self.display(&self.config.bar_chart_path);
        written.push(self.config.bar_chart_path.clone());

        let sim = self.simulate(&dist)?;
        HistogramRenderer::render_to_file(&self.config.histogram_path, &sim.histogram, &subject)
            .context("failed to render histogram")?;
        tracing::info!(path = %self.config.histogram_path.display(), "histogram written");
        self.display(&self.config.histogram_path);
        written.push(self.config.histogram_path.clone());

        Ok(RunOutcome::Completed(RunReport {
            population,
            sample_len: sim.ages.len(),
            summary: sim.summary,
            histogram: sim.histogram,
            written,
        }))
    }

    /// Load the configured sheet and normalize its columns.
    pub fn load_dataset(&self) -> Result<DataFrame, LoaderError> {
        let mut loader = DataLoader::new();
        loader.load_sheet(
            &self.config.input_path,
            &self.config.sheet_name,
            self.config.header_offset,
        )?;
        tracing::info!(
            path = ?loader.get_file_path(),
            rows = loader.get_row_count(),
            columns = loader.get_columns().len(),
            "dataset loaded"
        );

        let df = loader.take_dataframe().ok_or(LoaderError::NoColumns)?;
        DataProcessor::normalize_columns(&df).map_err(|err| match err {
            ProcessorError::NoColumns => LoaderError::NoColumns,
            ProcessorError::PolarsError(e) => LoaderError::Frame(e),
        })
    }

    /// Sample ages from `dist` and bin them.
    pub fn simulate(&self, dist: &AgeDistribution) -> anyhow::Result<Simulation> {
        let sampler = AgeSampler::new(
            self.config.population_size,
            self.config.seed,
            self.config.std_dev,
            self.config.open_group_midpoint,
        );
        let ages = sampler.sample(dist).context("failed to sample ages")?;
        let summary = StatsCalculator::summarize(&ages);
        tracing::info!(
            count = summary.count,
            mean = summary.mean,
            median = summary.median,
            std = summary.std,
            p05 = summary.p05,
            p95 = summary.p95,
            "age sample summary"
        );

        let histogram = Histogram::from_values(&ages, self.config.histogram_bins);
        Ok(Simulation {
            ages,
            histogram,
            summary,
        })
    }

    fn display(&self, path: &std::path::Path) {
        if self.config.display {
            charts::show(path);
        }
    }
}
