pub mod charts;
pub mod export;
pub mod json;
pub mod text;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::output::{OutputError, write_text};
use crate::stats::Analysis;

pub const REPORT_TITLE: &str = "Student Grade Analysis Report";
pub const RESULTS_BASE_NAME: &str = "Grade_Analysis_Results";

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub tool_name: String,
    pub tool_version: String,
    pub generated_at: NaiveDateTime,
    pub source: Option<String>,
    pub analysis: &'a Analysis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub report: PathBuf,
    pub summary: PathBuf,
}

pub fn format_f64_2(v: f64) -> String {
    if v.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.2}", v)
    }
}

/// Fraction rendered as a percentage with two decimals.
pub fn format_rate(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `Grade_Analysis_Results_<YYYYmmdd_HHMMSS>`.
pub fn default_base_name(ts: &NaiveDateTime) -> String {
    format!("{}_{}", RESULTS_BASE_NAME, ts.format("%Y%m%d_%H%M%S"))
}

pub fn write_reports(ctx: &ReportContext<'_>, out_dir: &Path) -> Result<ReportPaths, OutputError> {
    let report = out_dir.join("report.txt");
    write_text(&report, &text::render_report_text(ctx))?;

    let summary = out_dir.join("summary.json");
    write_text(&summary, &json::render_summary_json(ctx)?)?;

    Ok(ReportPaths { report, summary })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
