//! Spreadsheet Loader Module
//! Reads one worksheet with calamine and turns it into a Polars DataFrame.

use calamine::{open_workbook_auto, Data, Reader};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Error: File '{}' not found.", .0.display())]
    NotFound(PathBuf),
    #[error("Error loading file: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Error loading file: {0}")]
    Frame(#[from] PolarsError),
    #[error("Error loading file: no header row after skipping {0} rows")]
    NoHeader(usize),
    #[error("Error loading file: sheet has no columns")]
    NoColumns,
}

/// Handles spreadsheet loading into a DataFrame.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load `sheet` from the workbook at `file_path`, skipping `skip_rows`
    /// sheet rows before the header row.
    pub fn load_sheet(
        &mut self,
        file_path: &Path,
        sheet: &str,
        skip_rows: usize,
    ) -> Result<&DataFrame, LoaderError> {
        self.file_path = Some(file_path.to_path_buf());

        if !file_path.exists() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        // Workbook handle is dropped at the end of this block
        let range = {
            let mut workbook = open_workbook_auto(file_path)?;
            workbook.worksheet_range(sheet)?
        };

        // The range starts at the first used cell, not necessarily at A1
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
        let skip = skip_rows.saturating_sub(first_row);
        let rows: Vec<&[Data]> = range.rows().skip(skip).collect();

        let df = frame_from_rows(&rows, skip_rows)?;
        tracing::debug!(
            path = %file_path.display(),
            sheet,
            rows = df.height(),
            columns = df.width(),
            "sheet parsed"
        );

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoColumns)
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Move the loaded DataFrame out of the loader.
    pub fn take_dataframe(&mut self) -> Option<DataFrame> {
        self.df.take()
    }
}

/// Build a DataFrame from sheet rows where `rows[0]` is the header.
///
/// Columns holding only numbers (or nothing) become nullable `Float64`,
/// everything else becomes nullable `String`.
pub fn frame_from_rows<R: AsRef<[Data]>>(
    rows: &[R],
    skipped: usize,
) -> Result<DataFrame, LoaderError> {
    let Some((header, body)) = rows.split_first() else {
        return Err(LoaderError::NoHeader(skipped));
    };

    let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
    if width == 0 {
        return Err(LoaderError::NoColumns);
    }

    let names = header_names(header.as_ref(), width);
    let empty = Data::Empty;
    let columns = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<&Data> = body
                .iter()
                .map(|r| r.as_ref().get(idx).unwrap_or(&empty))
                .collect();
            build_column(name, &cells)
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

/// Header labels with blanks filled and duplicates suffixed.
fn header_names(header: &[Data], width: usize) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    (0..width)
        .map(|idx| {
            let base = match header.get(idx).and_then(cell_label) {
                Some(label) => label,
                None => format!("Unnamed: {}", idx),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

fn cell_label(cell: &Data) -> Option<String> {
    let label = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        other => other.to_string(),
    };
    (!label.is_empty()).then_some(label)
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        _ => None,
    }
}

fn build_column(name: String, cells: &[&Data]) -> Column {
    let numeric = cells
        .iter()
        .all(|c| matches!(c, Data::Empty | Data::Float(_) | Data::Int(_)));

    if numeric {
        let values: Vec<Option<f64>> = cells.iter().map(|c| cell_number(c)).collect();
        Column::new(name.into(), values)
    } else {
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|c| match c {
                Data::Empty => None,
                Data::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect();
        Column::new(name.into(), values)
    }
}
