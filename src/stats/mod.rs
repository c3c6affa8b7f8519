//! Stats module - age sampling, binning and summaries

mod calculator;
mod histogram;
mod sampler;

pub use calculator::{SampleSummary, StatsCalculator};
pub use histogram::Histogram;
pub use sampler::AgeSampler;
