use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityColumn {
    Number,
    StudentId,
    Name,
    Class,
}

impl IdentityColumn {
    pub fn all() -> &'static [IdentityColumn] {
        &[
            IdentityColumn::Number,
            IdentityColumn::StudentId,
            IdentityColumn::Name,
            IdentityColumn::Class,
        ]
    }

    pub fn header(self) -> &'static str {
        match self {
            IdentityColumn::Number => "No.",
            IdentityColumn::StudentId => "Student ID",
            IdentityColumn::Name => "Name",
            IdentityColumn::Class => "Class",
        }
    }

    pub fn from_header(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().iter().copied().find(|c| c.header() == name)
    }
}

/// Columns recomputed from subject scores; never stored in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedColumn {
    TotalScore,
    AverageScore,
    Rank,
}

impl DerivedColumn {
    pub fn all() -> &'static [DerivedColumn] {
        &[
            DerivedColumn::TotalScore,
            DerivedColumn::AverageScore,
            DerivedColumn::Rank,
        ]
    }

    pub fn header(self) -> &'static str {
        match self {
            DerivedColumn::TotalScore => "Total Score",
            DerivedColumn::AverageScore => "Average Score",
            DerivedColumn::Rank => "Rank",
        }
    }

    pub fn from_header(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().iter().copied().find(|c| c.header() == name)
    }
}

/// Largest accepted score magnitude. Keeps row totals and class sums well
/// inside `i64`.
pub const SCORE_LIMIT: i64 = i32::MAX as i64;

pub fn score_in_range(score: i64) -> bool {
    (-SCORE_LIMIT..=SCORE_LIMIT).contains(&score)
}

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("table has no subject columns")]
    NoSubjects,
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),
    #[error("row {row}: expected {expected} identity values, found {found}")]
    IdentityWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: expected {expected} scores, found {found}")]
    ScoreWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column '{column}': score {score} is out of range")]
    ScoreOutOfRange {
        row: usize,
        column: String,
        score: i64,
    },
}

/// Declared column layout, fixed when a table is generated or imported.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub identity: Vec<IdentityColumn>,
    pub subjects: Vec<String>,
}

impl TableSchema {
    pub fn new(identity: Vec<IdentityColumn>, subjects: Vec<String>) -> Result<Self, TableError> {
        if subjects.is_empty() {
            return Err(TableError::NoSubjects);
        }
        for (i, col) in identity.iter().enumerate() {
            if identity[..i].contains(col) {
                return Err(TableError::DuplicateColumn(col.header().to_string()));
            }
        }
        for (i, name) in subjects.iter().enumerate() {
            if subjects[..i].contains(name)
                || IdentityColumn::from_header(name).is_some()
                || DerivedColumn::from_header(name).is_some()
            {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { identity, subjects })
    }

    pub fn identity_index(&self, column: IdentityColumn) -> Option<usize> {
        self.identity.iter().position(|&c| c == column)
    }

    pub fn headers(&self, with_derived: bool) -> Vec<String> {
        let mut out = Vec::with_capacity(self.identity.len() + self.subjects.len() + 3);
        out.extend(self.identity.iter().map(|c| c.header().to_string()));
        out.extend(self.subjects.iter().cloned());
        if with_derived {
            out.extend(DerivedColumn::all().iter().map(|c| c.header().to_string()));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub identity: Vec<String>,
    pub scores: Vec<i64>,
}

/// One generated or imported grade table. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    schema: TableSchema,
    rows: Vec<StudentRow>,
}

impl ScoreTable {
    pub fn new(schema: TableSchema, rows: Vec<StudentRow>) -> Result<Self, TableError> {
        for (idx, row) in rows.iter().enumerate() {
            if row.identity.len() != schema.identity.len() {
                return Err(TableError::IdentityWidth {
                    row: idx + 1,
                    expected: schema.identity.len(),
                    found: row.identity.len(),
                });
            }
            if row.scores.len() != schema.subjects.len() {
                return Err(TableError::ScoreWidth {
                    row: idx + 1,
                    expected: schema.subjects.len(),
                    found: row.scores.len(),
                });
            }
            if let Some(pos) = row.scores.iter().position(|&s| !score_in_range(s)) {
                return Err(TableError::ScoreOutOfRange {
                    row: idx + 1,
                    column: schema.subjects[pos].clone(),
                    score: row.scores[pos],
                });
            }
        }
        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[StudentRow] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_subjects(&self) -> usize {
        self.schema.subjects.len()
    }

    pub fn identity_value(&self, row: usize, column: IdentityColumn) -> Option<&str> {
        let idx = self.schema.identity_index(column)?;
        self.rows.get(row).map(|r| r.identity[idx].as_str())
    }

    pub fn subject_scores(&self, subject: usize) -> Vec<i64> {
        self.rows.iter().map(|r| r.scores[subject]).collect()
    }

    /// Name, falling back to student ID, then to the 1-based row number.
    pub fn display_name(&self, row: usize) -> String {
        self.identity_value(row, IdentityColumn::Name)
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.identity_value(row, IdentityColumn::StudentId)
                    .filter(|s| !s.is_empty())
            })
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", row + 1))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
