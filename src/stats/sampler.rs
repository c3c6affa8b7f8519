//! Age Sampler Module
//! Simulates individual ages from the age-group table with a seeded generator.

use crate::data::AgeDistribution;
use rand::distributions::Distribution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use statrs::distribution::{Normal, NormalError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Age group label '{0}' is not of the form <start>-<end>")]
    InvalidLabel(String),
    #[error("Invalid normal distribution for group '{label}': {source}")]
    InvalidDistribution {
        label: String,
        #[source]
        source: NormalError,
    },
}

/// Draws normally distributed ages around each group's midpoint.
#[derive(Debug, Clone)]
pub struct AgeSampler {
    pub population_size: usize,
    pub seed: u64,
    pub std_dev: f64,
    /// Midpoint for the last group, whose label has no upper bound.
    pub open_group_midpoint: f64,
}

impl AgeSampler {
    pub fn new(population_size: usize, seed: u64, std_dev: f64, open_group_midpoint: f64) -> Self {
        Self {
            population_size,
            seed,
            std_dev,
            open_group_midpoint,
        }
    }

    /// Midpoint of a bounded label, e.g. "25-34" -> 29.5.
    pub fn midpoint_of(label: &str) -> Result<f64, SamplerError> {
        let invalid = || SamplerError::InvalidLabel(label.to_string());

        let (start, end) = label.split_once('-').ok_or_else(invalid)?;
        let start: u32 = start.trim().parse().map_err(|_| invalid())?;
        let end: u32 = end.trim().parse().map_err(|_| invalid())?;

        Ok((start as f64 + end as f64) / 2.0)
    }

    /// Samples for a group holding `percentage` percent of the population (floored).
    pub fn group_count(&self, percentage: f64) -> usize {
        (percentage * self.population_size as f64 / 100.0).floor() as usize
    }

    /// Midpoint for every group in table order.
    pub fn midpoints(&self, dist: &AgeDistribution) -> Result<Vec<f64>, SamplerError> {
        let last = dist.len().saturating_sub(1);
        dist.groups()
            .iter()
            .enumerate()
            .map(|(i, group)| {
                if i < last {
                    Self::midpoint_of(&group.label)
                } else {
                    Ok(self.open_group_midpoint)
                }
            })
            .collect()
    }

    /// Combined sample, one group after another in table order.
    pub fn sample(&self, dist: &AgeDistribution) -> Result<Vec<f64>, SamplerError> {
        let midpoints = self.midpoints(dist)?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut ages = Vec::with_capacity(self.expected_len(dist));

        for (group, midpoint) in dist.groups().iter().zip(midpoints) {
            let normal = Normal::new(midpoint, self.std_dev).map_err(|source| {
                SamplerError::InvalidDistribution {
                    label: group.label.clone(),
                    source,
                }
            })?;
            let count = self.group_count(group.percentage);
            tracing::debug!(group = %group.label, midpoint, count, "sampling age group");

            ages.extend(normal.sample_iter(&mut rng).take(count));
        }

        Ok(ages)
    }

    /// Length `sample` will return for this table.
    pub fn expected_len(&self, dist: &AgeDistribution) -> usize {
        dist.groups()
            .iter()
            .map(|g| self.group_count(g.percentage))
            .sum()
    }
}
