use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::output::{Cell, Grid, OutputError, write_atomic};

/// One workbook, one worksheet per `(name, grid)` pair, in order.
pub fn write_sheets(sheets: &[(&str, &Grid)], path: &Path) -> Result<(), OutputError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    for (name, grid) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name)?;
        fill_sheet(worksheet, grid, &header_format)?;
    }
    let bytes = workbook.save_to_buffer()?;
    write_atomic(path, |w| {
        w.write_all(&bytes)?;
        Ok(())
    })
}

fn fill_sheet(worksheet: &mut Worksheet, grid: &Grid, header: &Format) -> Result<(), XlsxError> {
    for (col, name) in grid.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, header)?;
    }
    for (r, row) in grid.rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) if s.is_empty() => {}
                Cell::Text(s) => {
                    worksheet.write_string(r, col, s)?;
                }
                Cell::Number(v) if v.is_finite() => {
                    worksheet.write_number(r, col, *v)?;
                }
                Cell::Number(_) => {}
            }
        }
    }
    Ok(())
}
