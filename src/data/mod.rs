//! Data module - spreadsheet loading, cleaning and the age table

mod distribution;
#[cfg(test)]
pub(crate) mod fixtures;
mod loader;
mod processor;

pub use distribution::AgeDistribution;
pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError};
