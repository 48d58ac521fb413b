use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::table::{IdentityColumn, ScoreTable};
use crate::stats::{as_f64, mean};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub subjects: Vec<String>,
    /// Row-major; `NaN` (serialized as `null`) where a column has no variance.
    pub values: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassAverages {
    pub class: String,
    pub students: usize,
    /// One mean per subject, in schema order.
    pub averages: Vec<f64>,
}

/// Pearson correlation; `NaN` for fewer than two pairs or zero variance.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return f64::NAN;
    }
    let (a, b) = (&a[..n], &b[..n]);
    let (ma, mb) = (mean(a), mean(b));
    let mut cov = 0.0;
    let mut va = 0.0;
    let mut vb = 0.0;
    for i in 0..n {
        let da = a[i] - ma;
        let db = b[i] - mb;
        cov += da * db;
        va += da * da;
        vb += db * db;
    }
    if va == 0.0 || vb == 0.0 {
        return f64::NAN;
    }
    cov / (va.sqrt() * vb.sqrt())
}

pub fn correlation_matrix(table: &ScoreTable) -> CorrelationMatrix {
    let columns: Vec<Vec<f64>> = (0..table.n_subjects())
        .map(|i| as_f64(&table.subject_scores(i)))
        .collect();
    let values = columns
        .iter()
        .map(|a| columns.iter().map(|b| pearson(a, b)).collect())
        .collect();
    CorrelationMatrix {
        subjects: table.schema().subjects.clone(),
        values,
    }
}

/// Mean score per subject for each class, classes in label order. `None`
/// when the table has no class column.
pub fn class_averages(table: &ScoreTable) -> Option<Vec<ClassAverages>> {
    let class_idx = table.schema().identity_index(IdentityColumn::Class)?;
    let n_subjects = table.n_subjects();

    let mut groups: BTreeMap<&str, (usize, Vec<i64>)> = BTreeMap::new();
    for row in table.rows() {
        let entry = groups
            .entry(row.identity[class_idx].as_str())
            .or_insert_with(|| (0, vec![0; n_subjects]));
        entry.0 += 1;
        for (sum, &score) in entry.1.iter_mut().zip(&row.scores) {
            *sum += score;
        }
    }

    Some(
        groups
            .into_iter()
            .map(|(class, (students, sums))| ClassAverages {
                class: class.to_string(),
                students,
                averages: sums
                    .iter()
                    .map(|&s| s as f64 / students as f64)
                    .collect(),
            })
            .collect(),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/advanced.rs"]
mod tests;
