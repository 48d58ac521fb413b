pub mod identity;
pub mod scores;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::model::subject::SubjectSpec;
use crate::model::table::{
    IdentityColumn, SCORE_LIMIT, ScoreTable, StudentRow, TableError, TableSchema, score_in_range,
};

pub use identity::ClassAssignment;
pub use scores::{generate_subject_scores, required_pass_count};

pub const DEFAULT_ID_PREFIX: &str = "2023";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("student count must be greater than 0")]
    NoStudents,
    #[error("select at least one subject")]
    NoSubjects,
    #[error("subject listed more than once: {0}")]
    DuplicateSubject(String),
    #[error("subject name must not be empty")]
    EmptySubjectName,
    #[error("target pass rate for {subject} must lie in [0, 1], got {rate}")]
    InvalidPassRate { subject: String, rate: f64 },
    #[error("score range for {subject} exceeds +/-{limit}")]
    ScoreRange { subject: String, limit: i64 },
    #[error(transparent)]
    Table(#[from] TableError),
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub student_count: usize,
    pub subjects: Vec<SubjectSpec>,
    pub id_prefix: String,
    pub class_assignment: ClassAssignment,
}

impl GenerationRequest {
    pub fn new(student_count: usize, subjects: Vec<SubjectSpec>) -> Self {
        Self {
            student_count,
            subjects,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            class_assignment: ClassAssignment::Random,
        }
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.student_count == 0 {
            return Err(GenerateError::NoStudents);
        }
        if self.subjects.is_empty() {
            return Err(GenerateError::NoSubjects);
        }
        for (i, subject) in self.subjects.iter().enumerate() {
            if subject.name.trim().is_empty() {
                return Err(GenerateError::EmptySubjectName);
            }
            if self.subjects[..i].iter().any(|s| s.name == subject.name) {
                return Err(GenerateError::DuplicateSubject(subject.name.clone()));
            }
            if ![subject.min_score, subject.max_score, subject.pass_score]
                .into_iter()
                .all(score_in_range)
            {
                return Err(GenerateError::ScoreRange {
                    subject: subject.name.clone(),
                    limit: SCORE_LIMIT,
                });
            }
            let rate = subject.target_pass_rate;
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(GenerateError::InvalidPassRate {
                    subject: subject.name.clone(),
                    rate,
                });
            }
        }
        Ok(())
    }
}

/// Build a fresh table: identity fields for every student first, then one
/// score column per requested subject, in request order.
pub fn generate_table<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<ScoreTable, GenerateError> {
    request.validate()?;
    let n = request.student_count;

    let schema = TableSchema::new(
        IdentityColumn::all().to_vec(),
        request.subjects.iter().map(|s| s.name.clone()).collect(),
    )?;

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let name = identity::random_name(rng);
        let class = identity::assign_class(rng, &request.class_assignment);
        rows.push(StudentRow {
            identity: vec![
                (i + 1).to_string(),
                identity::student_id(&request.id_prefix, i),
                name,
                class,
            ],
            scores: Vec::with_capacity(request.subjects.len()),
        });
    }

    for subject in &request.subjects {
        let scores = generate_subject_scores(rng, n, subject);
        let norm = subject.normalized();
        debug!(
            subject = %subject.name,
            required = required_pass_count(n, subject.target_pass_rate),
            passed = scores.iter().filter(|&&v| v >= norm.pass_score).count(),
            "generated subject scores"
        );
        for (row, score) in rows.iter_mut().zip(scores) {
            row.scores.push(score);
        }
    }

    Ok(ScoreTable::new(schema, rows)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/generate/mod.rs"]
mod tests;
