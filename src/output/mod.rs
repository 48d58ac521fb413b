use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

pub mod delimited;
pub mod spreadsheet;

use crate::model::format::{TableFormat, is_gzip};
use crate::model::table::{IdentityColumn, ScoreTable};
use crate::stats::ranking::student_totals;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported output format: {0} (use .csv or .xlsx)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Append Total Score, Average Score and Rank.
    pub with_derived: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(v) => format_number(*v),
        }
    }
}

/// A header row and body cells ready for either writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

pub fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else if v.is_nan() {
        String::new()
    } else {
        v.to_string()
    }
}

pub fn table_grid(table: &ScoreTable, options: ExportOptions) -> Grid {
    let schema = table.schema();
    let totals = if options.with_derived {
        student_totals(table)
    } else {
        Vec::new()
    };

    let mut rows = Vec::with_capacity(table.n_rows());
    for (idx, row) in table.rows().iter().enumerate() {
        let mut cells = Vec::with_capacity(schema.identity.len() + row.scores.len() + 3);
        for (col, value) in schema.identity.iter().zip(&row.identity) {
            cells.push(identity_cell(*col, value));
        }
        cells.extend(row.scores.iter().map(|&s| Cell::Number(s as f64)));
        if let Some(t) = totals.get(idx) {
            cells.push(Cell::Number(t.total as f64));
            cells.push(Cell::Number(t.average));
            cells.push(Cell::Number(t.rank as f64));
        }
        rows.push(cells);
    }

    Grid {
        headers: schema.headers(options.with_derived),
        rows,
    }
}

/// `No.` is numeric when it reads back identically; everything else is text.
fn identity_cell(column: IdentityColumn, value: &str) -> Cell {
    if column == IdentityColumn::Number {
        if let Ok(n) = value.parse::<i64>() {
            if n.to_string() == value {
                return Cell::Number(n as f64);
            }
        }
    }
    Cell::Text(value.to_string())
}

pub fn write_table(
    table: &ScoreTable,
    path: &Path,
    options: ExportOptions,
) -> Result<(), OutputError> {
    let grid = table_grid(table, options);
    write_grid(&grid, path, "Scores")?;
    info!("wrote {} records to {}", table.n_rows(), path.display());
    Ok(())
}

pub fn write_grid(grid: &Grid, path: &Path, sheet_name: &str) -> Result<(), OutputError> {
    match TableFormat::from_path(path) {
        Some(TableFormat::Csv) => delimited::write_grid(grid, path),
        Some(TableFormat::Xlsx) if !is_gzip(path) => {
            spreadsheet::write_sheets(&[(sheet_name, grid)], path)
        }
        _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Writes through a temporary file in the destination directory; the target
/// only appears once every byte is on disk, and the temporary file is removed
/// on any failure.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), OutputError>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    write(tmp.as_file_mut())?;
    tmp.as_file_mut().flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn write_text(path: &Path, text: &str) -> Result<(), OutputError> {
    write_atomic(path, |w| {
        w.write_all(text.as_bytes())?;
        Ok(())
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/output/mod.rs"]
mod tests;
