use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SCORE: i64 = 0;
pub const DEFAULT_MAX_SCORE: i64 = 100;
pub const DEFAULT_PASS_SCORE: i64 = 60;
pub const DEFAULT_PASS_RATE: f64 = 0.60;

const BUILTIN_SUBJECT_NAMES: &[&str] = &[
    "Ethics",
    "Language",
    "Mathematics",
    "Foreign Language",
    "Physics",
    "History",
    "Biology",
    "Geography",
    "Chemistry",
    "Politics",
    "Science",
    "Information Technology",
    "Current Affairs",
];

/// Score range and pass policy for one generated subject.
///
/// `pass_score` is the inclusive lower bound of a passing score and may fall
/// outside `[min_score, max_score]`; generation clamps such ranges instead
/// of rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSpec {
    pub name: String,
    pub min_score: i64,
    pub max_score: i64,
    pub pass_score: i64,
    /// Fraction in `[0, 1]`.
    pub target_pass_rate: f64,
}

impl SubjectSpec {
    pub fn new(
        name: impl Into<String>,
        min_score: i64,
        max_score: i64,
        pass_score: i64,
        target_pass_rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            min_score,
            max_score,
            pass_score,
            target_pass_rate,
        }
    }

    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(
            name,
            DEFAULT_MIN_SCORE,
            DEFAULT_MAX_SCORE,
            DEFAULT_PASS_SCORE,
            DEFAULT_PASS_RATE,
        )
    }

    /// Copy with `min_score <= max_score`.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        if out.min_score > out.max_score {
            std::mem::swap(&mut out.min_score, &mut out.max_score);
        }
        out
    }
}

pub fn builtin_subjects() -> Vec<SubjectSpec> {
    BUILTIN_SUBJECT_NAMES
        .iter()
        .map(|&name| SubjectSpec::with_defaults(name))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/subject.rs"]
mod tests;
