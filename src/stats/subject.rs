use serde::Serialize;

use crate::model::table::ScoreTable;
use crate::stats::{Describe, as_f64, describe};

pub const PASS_THRESHOLD: i64 = 60;
pub const EXCELLENT_THRESHOLD: i64 = 90;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectStats {
    pub subject: String,
    pub summary: Describe,
    /// Fraction of scores `>= 60`.
    pub pass_rate: f64,
    /// Fraction of scores `>= 90`.
    pub excellent_rate: f64,
}

pub fn rate_at_least(scores: &[i64], threshold: i64) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().filter(|&&s| s >= threshold).count() as f64 / scores.len() as f64
}

pub fn subject_stats(table: &ScoreTable) -> Vec<SubjectStats> {
    table
        .schema()
        .subjects
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let scores = table.subject_scores(idx);
            SubjectStats {
                subject: name.clone(),
                summary: describe(&as_f64(&scores)),
                pass_rate: rate_at_least(&scores, PASS_THRESHOLD),
                excellent_rate: rate_at_least(&scores, EXCELLENT_THRESHOLD),
            }
        })
        .collect()
}

/// Closing summary across all subjects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conclusions {
    /// Mean of the per-subject means.
    pub overall_average: f64,
    pub best_subject: String,
    pub best_mean: f64,
    pub worst_subject: String,
    pub worst_mean: f64,
    /// Fraction of all subject scores `>= 60`.
    pub overall_pass_rate: f64,
}

/// Ties on the mean go to the subject listed first.
pub fn conclusions(stats: &[SubjectStats]) -> Option<Conclusions> {
    let first = stats.first()?;
    let mut best = first;
    let mut worst = first;
    for s in &stats[1..] {
        if s.summary.mean > best.summary.mean {
            best = s;
        }
        if s.summary.mean < worst.summary.mean {
            worst = s;
        }
    }

    let n = stats.len() as f64;
    let scored: usize = stats.iter().map(|s| s.summary.count).sum();
    let passed: f64 = stats
        .iter()
        .map(|s| s.pass_rate * s.summary.count as f64)
        .sum();
    Some(Conclusions {
        overall_average: stats.iter().map(|s| s.summary.mean).sum::<f64>() / n,
        best_subject: best.subject.clone(),
        best_mean: best.summary.mean,
        worst_subject: worst.subject.clone(),
        worst_mean: worst.summary.mean,
        overall_pass_rate: if scored == 0 {
            0.0
        } else {
            passed / scored as f64
        },
    })
}
