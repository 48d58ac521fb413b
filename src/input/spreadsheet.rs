use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::input::{InputError, RawTable};
use crate::output::format_number;

/// Reads the first worksheet; the first row is the header.
pub fn read_raw(path: &Path) -> Result<RawTable, InputError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        InputError::Parse(format!("{} contains no worksheets", path.display()))
    })??;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(cell_text).collect(),
        None => {
            return Err(InputError::Parse(format!(
                "{} has no header row",
                path.display()
            )));
        }
    };
    let rows = rows_iter
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) => format_number(*v),
        Data::Bool(v) => v.to_string(),
        other => other.to_string(),
    }
}
