use tracing::debug;

use crate::input::InputError;
use crate::model::table::{
    DerivedColumn, IdentityColumn, SCORE_LIMIT, ScoreTable, StudentRow, TableSchema,
    score_in_range,
};

/// Header plus string cells, as read from any supported file format.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Identity(IdentityColumn),
    Derived(DerivedColumn),
    Subject,
}

pub fn classify_header(name: &str) -> ColumnRole {
    if let Some(col) = IdentityColumn::from_header(name) {
        ColumnRole::Identity(col)
    } else if let Some(col) = DerivedColumn::from_header(name) {
        ColumnRole::Derived(col)
    } else {
        ColumnRole::Subject
    }
}

/// Classifies every header once and parses subject cells as integer scores.
/// Derived columns are dropped; they are recomputed on analysis.
pub fn build_table(raw: RawTable) -> Result<ScoreTable, InputError> {
    let mut identity = Vec::new();
    let mut identity_src = Vec::new();
    let mut subjects = Vec::new();
    let mut subject_src = Vec::new();

    for (idx, header) in raw.headers.iter().enumerate() {
        let header = header.trim();
        if header.is_empty() {
            return Err(InputError::Parse(format!(
                "column {} has an empty header",
                idx + 1
            )));
        }
        match classify_header(header) {
            ColumnRole::Identity(col) => {
                identity.push(col);
                identity_src.push(idx);
            }
            ColumnRole::Derived(col) => {
                debug!("dropping derived column {}", col.header());
            }
            ColumnRole::Subject => {
                subjects.push(header.to_string());
                subject_src.push(idx);
            }
        }
    }

    let schema = TableSchema::new(identity, subjects)?;

    let mut rows = Vec::with_capacity(raw.rows.len());
    for (row_idx, cells) in raw.rows.iter().enumerate() {
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let cell = |idx: usize| cells.get(idx).map(|s| s.trim()).unwrap_or("");
        let identity_values = identity_src.iter().map(|&i| cell(i).to_string()).collect();
        let mut scores = Vec::with_capacity(subject_src.len());
        for (s, &i) in subject_src.iter().enumerate() {
            scores.push(parse_score(cell(i), row_idx + 1, &schema.subjects[s])?);
        }
        rows.push(StudentRow {
            identity: identity_values,
            scores,
        });
    }

    Ok(ScoreTable::new(schema, rows)?)
}

/// Integer score within `SCORE_LIMIT`; integral floats such as `85.0` are
/// accepted.
pub fn parse_score(cell: &str, row: usize, column: &str) -> Result<i64, InputError> {
    let cell = cell.trim();
    let value = match cell.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => match cell.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => Some(v as i64),
            _ => None,
        },
    };
    match value {
        Some(v) if score_in_range(v) => Ok(v),
        Some(v) => Err(InputError::Parse(format!(
            "row {row}, column '{column}': score {v} is outside +/-{SCORE_LIMIT}"
        ))),
        None => Err(InputError::Parse(format!(
            "row {row}, column '{column}': '{cell}' is not an integer score"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/schema.rs"]
mod tests;
