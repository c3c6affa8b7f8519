//! Statistics Calculator Module
//! Descriptive statistics for the simulated age sample.

use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Summary of a set of sampled values.
#[derive(Debug, Clone)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub p95: f64,
    pub p05: f64,
}

impl Default for SampleSummary {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            p95: f64::NAN,
            p05: f64::NAN,
        }
    }
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn summarize(values: &[f64]) -> SampleSummary {
        let n = values.len();
        if n == 0 {
            return SampleSummary::default();
        }

        let std = if n > 1 { values.iter().std_dev() } else { 0.0 };
        // R-8 quantiles, median-unbiased for continuous samples
        let mut data = Data::new(values.to_vec());

        SampleSummary {
            count: n,
            mean: values.iter().mean(),
            median: data.quantile(0.5),
            std,
            p95: data.quantile(0.95),
            p05: data.quantile(0.05),
        }
    }
}
