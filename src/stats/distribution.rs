use serde::Serialize;

use crate::model::table::ScoreTable;
use crate::stats::{as_f64, mean};

pub const BAND_LABELS: [&str; 5] = ["Fail", "Pass", "Average", "Good", "Excellent"];
pub const SUBJECT_HISTOGRAM_BINS: usize = 12;
pub const TOTAL_HISTOGRAM_BINS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBand {
    pub label: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDistribution {
    pub subject: String,
    pub mean: f64,
    pub pass_line: i64,
    pub histogram: Vec<HistogramBin>,
    pub bands: Vec<ScoreBand>,
}

/// Band edges picked from the observed maximum: the 100-point scale, the
/// 150-point scale, or 60/70/80/90% of the maximum beyond that.
pub fn band_edges(observed_max: f64) -> [f64; 6] {
    if observed_max <= 100.0 {
        [0.0, 60.0, 70.0, 80.0, 90.0, 100.0]
    } else if observed_max <= 150.0 {
        [0.0, 90.0, 105.0, 120.0, 135.0, 150.0]
    } else {
        [
            0.0,
            observed_max * 0.6,
            observed_max * 0.7,
            observed_max * 0.8,
            observed_max * 0.9,
            observed_max,
        ]
    }
}

pub fn pass_line(observed_max: f64) -> i64 {
    if observed_max <= 100.0 { 60 } else { 90 }
}

/// Right-closed intervals with the lowest edge included. Values outside every
/// band are not counted; fractions are over counted values.
pub fn score_bands(values: &[f64]) -> Vec<ScoreBand> {
    let observed_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let edges = band_edges(if values.is_empty() { 0.0 } else { observed_max });

    let mut counts = [0usize; 5];
    for &v in values {
        if let Some(idx) = band_index(&edges, v) {
            counts[idx] += 1;
        }
    }
    let binned: usize = counts.iter().sum();

    (0..5)
        .map(|i| ScoreBand {
            label: BAND_LABELS[i],
            lower: edges[i],
            upper: edges[i + 1],
            count: counts[i],
            fraction: if binned == 0 {
                0.0
            } else {
                counts[i] as f64 / binned as f64
            },
        })
        .collect()
}

fn band_index(edges: &[f64; 6], v: f64) -> Option<usize> {
    if v >= edges[0] && v <= edges[1] {
        return Some(0);
    }
    (1..5).find(|&i| v > edges[i] && v <= edges[i + 1])
}

/// Equal-width bins over `[min, max]`; the last bin is right-closed.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

pub fn subject_distributions(table: &ScoreTable) -> Vec<SubjectDistribution> {
    table
        .schema()
        .subjects
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values = as_f64(&table.subject_scores(idx));
            let observed_max = values.iter().copied().fold(0.0, f64::max);
            SubjectDistribution {
                subject: name.clone(),
                mean: mean(&values),
                pass_line: pass_line(observed_max),
                histogram: histogram(&values, SUBJECT_HISTOGRAM_BINS),
                bands: score_bands(&values),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/distribution.rs"]
mod tests;
