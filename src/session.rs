use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::generate::{GenerateError, GenerationRequest, generate_table};
use crate::input::{InputError, load_table};
use crate::model::table::ScoreTable;
use crate::output::{ExportOptions, OutputError, write_table};
use crate::report::charts::{AnalysisKind, ChartArtifact, build_charts, write_charts};
use crate::report::export::export_analysis;
use crate::report::{ReportContext, ReportPaths, write_reports};
use crate::stats::{Analysis, run_analysis};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no data loaded; generate or import a table first")]
    NoData,
    #[error("no analysis available; run an analysis first")]
    NoAnalysis,
    #[error("table has no source file; choose an explicit destination")]
    NoDestination,
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Active table, where it came from, and the results derived from it.
///
/// Replacing the table (generate or import) discards the previous analysis
/// and charts.
#[derive(Debug, Default)]
pub struct Session {
    table: Option<ScoreTable>,
    source: Option<PathBuf>,
    analysis: Option<Analysis>,
    charts: Vec<ChartArtifact>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn replace_table(&mut self, table: ScoreTable, source: Option<PathBuf>) {
        self.table = Some(table);
        self.source = source;
        self.analysis = None;
        self.charts.clear();
    }

    /// A generated table has no source path until it is exported.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<&ScoreTable, SessionError> {
        let table = generate_table(request, rng)?;
        info!(
            "generated {} students x {} subjects",
            table.n_rows(),
            table.n_subjects()
        );
        self.replace_table(table, None);
        self.table()
    }

    pub fn import(&mut self, path: &Path) -> Result<&ScoreTable, SessionError> {
        let table = load_table(path)?;
        self.replace_table(table, Some(path.to_path_buf()));
        self.table()
    }

    pub fn table(&self) -> Result<&ScoreTable, SessionError> {
        self.table.as_ref().ok_or(SessionError::NoData)
    }

    /// Write the table back to the file it was imported from or last
    /// exported to.
    pub fn save(&self, options: ExportOptions) -> Result<PathBuf, SessionError> {
        let table = self.table()?;
        let path = self.source.clone().ok_or(SessionError::NoDestination)?;
        write_table(table, &path, options)?;
        Ok(path)
    }

    /// Export to `path`, which becomes the source for later saves.
    pub fn export(&mut self, path: &Path, options: ExportOptions) -> Result<(), SessionError> {
        write_table(self.table()?, path, options)?;
        self.source = Some(path.to_path_buf());
        Ok(())
    }

    pub fn analyze(&mut self) -> Result<&Analysis, SessionError> {
        let analysis = run_analysis(self.table()?);
        self.charts.clear();
        Ok(self.analysis.insert(analysis))
    }

    pub fn analysis(&self) -> Result<&Analysis, SessionError> {
        self.analysis.as_ref().ok_or(SessionError::NoAnalysis)
    }

    /// Replace the chart set with the charts for `kinds`.
    pub fn render_charts(
        &mut self,
        kinds: &[AnalysisKind],
        base: &str,
    ) -> Result<&[ChartArtifact], SessionError> {
        let charts = build_charts(self.analysis()?, kinds, base);
        self.charts = charts;
        Ok(&self.charts)
    }

    pub fn export_analysis(&self, path: &Path) -> Result<(), SessionError> {
        export_analysis(self.analysis()?, path)?;
        Ok(())
    }

    pub fn write_report(
        &self,
        out_dir: &Path,
        generated_at: NaiveDateTime,
    ) -> Result<ReportPaths, SessionError> {
        let ctx = ReportContext {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at,
            source: self.source.as_ref().map(|p| p.display().to_string()),
            analysis: self.analysis()?,
        };
        Ok(write_reports(&ctx, out_dir)?)
    }

    pub fn export_charts(&self, out_dir: &Path) -> Result<Vec<PathBuf>, SessionError> {
        Ok(write_charts(&self.charts, out_dir)?)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session/mod.rs"]
mod tests;
