//! Age Distribution Table
//! Fixed approximation of India's 2020 population share per age group.

use serde::Serialize;

/// One labelled age bucket and its share of the population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeGroup {
    pub label: String,
    pub percentage: f64,
}

/// Ordered age groups, youngest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeDistribution {
    groups: Vec<AgeGroup>,
}

const INDIA_2020: [(&str, f64); 7] = [
    ("0-14", 26.2),
    ("15-24", 17.9),
    ("25-34", 16.8),
    ("35-44", 13.5),
    ("45-54", 11.1),
    ("55-64", 8.0),
    ("65+", 6.5),
];

impl AgeDistribution {
    /// The hardcoded table. Not derived from the loaded dataset.
    pub fn india_2020() -> Self {
        Self::from_pairs(&INDIA_2020)
    }

    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            groups: pairs
                .iter()
                .map(|(label, percentage)| AgeGroup {
                    label: label.to_string(),
                    percentage: *percentage,
                })
                .collect(),
        }
    }

    pub fn groups(&self) -> &[AgeGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn total_percentage(&self) -> f64 {
        self.groups.iter().map(|g| g.percentage).sum()
    }

    /// Largest share, 0.0 for an empty table.
    pub fn max_percentage(&self) -> f64 {
        self.groups
            .iter()
            .map(|g| g.percentage)
            .fold(0.0, f64::max)
    }
}
