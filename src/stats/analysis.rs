use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::table::{IdentityColumn, ScoreTable};
use crate::stats::advanced::{ClassAverages, CorrelationMatrix, class_averages, correlation_matrix};
use crate::stats::distribution::{
    HistogramBin, SubjectDistribution, TOTAL_HISTOGRAM_BINS, histogram, subject_distributions,
};
use crate::stats::ranking::{StudentTotal, student_totals, top_n};
use crate::stats::subject::{Conclusions, SubjectStats, conclusions, subject_stats};
use crate::stats::{Describe, describe};

pub const REPORT_TOP_N: usize = 10;
pub const RADAR_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStudent {
    pub name: String,
    pub total: i64,
    pub average: f64,
    pub rank: usize,
    pub scores: Vec<i64>,
}

/// Everything the reports and chart artifacts read, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub record_count: usize,
    pub distinct_names: Option<usize>,
    pub subjects: Vec<String>,
    pub subject_stats: Vec<SubjectStats>,
    pub totals: Vec<StudentTotal>,
    pub total_summary: Describe,
    pub average_summary: Describe,
    pub total_histogram: Vec<HistogramBin>,
    pub distributions: Vec<SubjectDistribution>,
    pub correlation: CorrelationMatrix,
    pub class_averages: Option<Vec<ClassAverages>>,
    pub top_students: Vec<RankedStudent>,
    pub conclusions: Option<Conclusions>,
}

impl Analysis {
    pub fn top(&self, n: usize) -> &[RankedStudent] {
        &self.top_students[..n.min(self.top_students.len())]
    }
}

pub fn run_analysis(table: &ScoreTable) -> Analysis {
    let totals = student_totals(table);
    let total_values: Vec<f64> = totals.iter().map(|t| t.total as f64).collect();
    let average_values: Vec<f64> = totals.iter().map(|t| t.average).collect();

    let distinct_names = table.schema().identity_index(IdentityColumn::Name).map(|idx| {
        table
            .rows()
            .iter()
            .map(|r| r.identity[idx].as_str())
            .collect::<BTreeSet<_>>()
            .len()
    });

    let top_students = top_n(&totals, REPORT_TOP_N)
        .into_iter()
        .map(|t| RankedStudent {
            name: table.display_name(t.row),
            total: t.total,
            average: t.average,
            rank: t.rank,
            scores: table.rows()[t.row].scores.clone(),
        })
        .collect();

    let subject_stats = subject_stats(table);
    let conclusions = conclusions(&subject_stats);

    Analysis {
        record_count: table.n_rows(),
        distinct_names,
        subjects: table.schema().subjects.clone(),
        subject_stats,
        total_summary: describe(&total_values),
        average_summary: describe(&average_values),
        total_histogram: histogram(&total_values, TOTAL_HISTOGRAM_BINS),
        totals,
        distributions: subject_distributions(table),
        correlation: correlation_matrix(table),
        class_averages: class_averages(table),
        top_students,
        conclusions,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/analysis.rs"]
mod tests;
