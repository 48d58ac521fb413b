use std::path::Path;

use thiserror::Error;
use tracing::info;

pub mod delimited;
pub mod gz;
pub mod schema;
pub mod spreadsheet;

use crate::model::format::{TableFormat, is_gzip};
use crate::model::table::{ScoreTable, TableError};

pub use schema::RawTable;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported input format: {0} (use .csv, .xlsx or .xls)")]
    UnsupportedFormat(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("invalid table: {0}")]
    Table(#[from] TableError),
}

pub fn load_table(path: &Path) -> Result<ScoreTable, InputError> {
    let format = TableFormat::from_path(path)
        .ok_or_else(|| InputError::UnsupportedFormat(path.display().to_string()))?;
    let raw = match format {
        TableFormat::Csv => delimited::read_raw(path)?,
        TableFormat::Xlsx | TableFormat::Xls if is_gzip(path) => {
            return Err(InputError::UnsupportedFormat(path.display().to_string()));
        }
        TableFormat::Xlsx | TableFormat::Xls => spreadsheet::read_raw(path)?,
    };
    let table = schema::build_table(raw)?;
    info!(
        "imported {} records with {} subjects from {}",
        table.n_rows(),
        table.n_subjects(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
