//! Data Processor Module
//! Column normalization and lookups on the loaded population frame.

use polars::prelude::*;
use thiserror::Error;

/// Name given to the first column after cleaning.
pub const COUNTRY_COLUMN: &str = "Country";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("DataFrame has no columns")]
    NoColumns,
}

/// Handles data cleaning operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Rename the first column to `Country`, keeping the others as-is.
    ///
    /// The frame is rebuilt from its columns so the schema matches the new names.
    pub fn normalize_columns(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let mut columns = df.get_columns().to_vec();
        let first = columns.first_mut().ok_or(ProcessorError::NoColumns)?;
        first.rename(COUNTRY_COLUMN.into());

        Ok(DataFrame::new(columns)?)
    }

    /// Value in the `year` column for the first row whose country matches.
    ///
    /// `Ok(None)` when the year column, the country row or the value is missing;
    /// polars failures (e.g. a non-text country column) are returned as errors.
    pub fn country_population(
        df: &DataFrame,
        country: &str,
        year: u32,
    ) -> Result<Option<f64>, ProcessorError> {
        let year_col = year.to_string();
        if !df.get_column_names().iter().any(|name| name.as_str() == year_col) {
            return Ok(None);
        }

        let selected = df
            .clone()
            .lazy()
            .filter(col(COUNTRY_COLUMN).eq(lit(country)))
            .select([col(year_col.as_str()).cast(DataType::Float64)])
            .limit(1)
            .collect()?;

        if selected.height() == 0 {
            return Ok(None);
        }
        let value = selected.column(&year_col)?.f64()?.get(0);
        Ok(value)
    }
}
