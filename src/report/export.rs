//! Analysis-results export: describe table plus the top-student list.

use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::model::format::{TableFormat, is_gzip};
use crate::model::table::DerivedColumn;
use crate::output::{Cell, Grid, OutputError, spreadsheet, write_text};
use crate::stats::analysis::REPORT_TOP_N;
use crate::stats::{Analysis, Describe};

pub const STATS_SHEET: &str = "Statistical Data";
pub const TOP_SHEET: &str = "Top Students";
pub const TOP_NOTE: &str = "Top 10 Students by Total Score";

const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

fn describe_column(d: &Describe) -> [f64; 8] {
    [
        d.count as f64,
        d.mean,
        d.std,
        d.min,
        d.p25,
        d.median,
        d.p75,
        d.max,
    ]
}

/// One row per statistic; one column per subject, then total and average.
pub fn describe_grid(a: &Analysis) -> Grid {
    let mut headers = vec!["Statistic".to_string()];
    headers.extend(a.subjects.iter().cloned());
    headers.push(DerivedColumn::TotalScore.header().to_string());
    headers.push(DerivedColumn::AverageScore.header().to_string());

    let columns: Vec<[f64; 8]> = a
        .subject_stats
        .iter()
        .map(|s| &s.summary)
        .chain([&a.total_summary, &a.average_summary])
        .map(describe_column)
        .collect();

    let rows = STAT_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut row = vec![Cell::Text(label.to_string())];
            row.extend(columns.iter().map(|c| Cell::Number(c[i])));
            row
        })
        .collect();

    Grid { headers, rows }
}

pub fn top_students_grid(a: &Analysis) -> Grid {
    Grid {
        headers: vec![
            "Name".to_string(),
            DerivedColumn::TotalScore.header().to_string(),
            DerivedColumn::Rank.header().to_string(),
        ],
        rows: a
            .top(REPORT_TOP_N)
            .iter()
            .map(|s| {
                vec![
                    Cell::Text(s.name.clone()),
                    Cell::Number(s.total as f64),
                    Cell::Number(s.rank as f64),
                ]
            })
            .collect(),
    }
}

fn grid_csv(grid: &Grid) -> Result<String, OutputError> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    writer.write_record(&grid.headers)?;
    for row in &grid.rows {
        writer.write_record(row.iter().map(|c| c.to_text()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn export_analysis(a: &Analysis, path: &Path) -> Result<(), OutputError> {
    let stats = describe_grid(a);
    let top = top_students_grid(a);
    if is_gzip(path) {
        return Err(OutputError::UnsupportedFormat(path.display().to_string()));
    }
    match TableFormat::from_path(path) {
        Some(TableFormat::Xlsx) => {
            spreadsheet::write_sheets(&[(STATS_SHEET, &stats), (TOP_SHEET, &top)], path)?
        }
        Some(TableFormat::Csv) => {
            let mut text = grid_csv(&stats)?;
            text.push('\n');
            text.push_str(TOP_NOTE);
            text.push('\n');
            text.push_str(&grid_csv(&top)?);
            write_text(path, &text)?;
        }
        _ => return Err(OutputError::UnsupportedFormat(path.display().to_string())),
    }
    info!("exported analysis results to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/export.rs"]
mod tests;
