use serde::Serialize;

use crate::model::table::ScoreTable;
use crate::stats::round2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentTotal {
    pub row: usize,
    pub total: i64,
    pub average: f64,
    pub rank: usize,
}

/// Minimum-rank tie policy: `1 + |{t : t > x}|`. `[90, 90, 80]` ranks `[1, 1, 3]`.
pub fn min_rank(totals: &[i64]) -> Vec<usize> {
    let mut desc = totals.to_vec();
    desc.sort_unstable_by(|a, b| b.cmp(a));
    totals
        .iter()
        .map(|&x| desc.partition_point(|&v| v > x) + 1)
        .collect()
}

pub fn student_totals(table: &ScoreTable) -> Vec<StudentTotal> {
    let n_subjects = table.n_subjects().max(1) as f64;
    let totals: Vec<i64> = table
        .rows()
        .iter()
        .map(|r| r.scores.iter().sum())
        .collect();
    let ranks = min_rank(&totals);
    totals
        .iter()
        .zip(ranks)
        .enumerate()
        .map(|(row, (&total, rank))| StudentTotal {
            row,
            total,
            average: round2(total as f64 / n_subjects),
            rank,
        })
        .collect()
}

/// Highest totals first; equal totals keep table order.
pub fn top_n(totals: &[StudentTotal], n: usize) -> Vec<StudentTotal> {
    let mut sorted = totals.to_vec();
    sorted.sort_by(|a, b| b.total.cmp(&a.total).then(a.row.cmp(&b.row)));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/ranking.rs"]
mod tests;
