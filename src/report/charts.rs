//! Chart artifacts: the data each analysis chart plots, handed to an external
//! renderer as JSON. Styling and layout are the renderer's concern.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::output::{OutputError, write_text};
use crate::stats::Analysis;
use crate::stats::analysis::RADAR_TOP_N;
use crate::stats::distribution::{HistogramBin, ScoreBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Subject,
    Distribution,
    Advanced,
}

impl AnalysisKind {
    pub fn all() -> &'static [AnalysisKind] {
        &[
            AnalysisKind::Subject,
            AnalysisKind::Distribution,
            AnalysisKind::Advanced,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    TotalHistogram,
    SubjectMeans,
    SubjectBoxes,
    SubjectDistribution,
    CorrelationHeatmap,
    ClassComparison,
    TopStudentRadar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub label: String,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    Histogram {
        bins: Vec<HistogramBin>,
        mean: f64,
    },
    Bars {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    Boxes {
        boxes: Vec<BoxSummary>,
    },
    Distribution {
        bins: Vec<HistogramBin>,
        mean: f64,
        pass_line: i64,
        bands: Vec<ScoreBand>,
    },
    Heatmap {
        labels: Vec<String>,
        values: Vec<Vec<f64>>,
    },
    GroupedBars {
        groups: Vec<String>,
        series: Vec<String>,
        values: Vec<Vec<f64>>,
    },
    Radar {
        axes: Vec<String>,
        series: Vec<RadarSeries>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub title: String,
    pub file_stem: String,
    pub data: ChartData,
}

fn stem_part(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

fn total_histogram(a: &Analysis, base: &str) -> ChartArtifact {
    ChartArtifact {
        kind: ChartKind::TotalHistogram,
        title: "Total Score Distribution".to_string(),
        file_stem: format!("{base}_Total_Score_Distribution"),
        data: ChartData::Histogram {
            bins: a.total_histogram.clone(),
            mean: a.total_summary.mean,
        },
    }
}

fn subject_charts(a: &Analysis, base: &str) -> Vec<ChartArtifact> {
    let means = ChartArtifact {
        kind: ChartKind::SubjectMeans,
        title: "Subject Average Score Comparison".to_string(),
        file_stem: format!("{base}_Subject_Average_Comparison"),
        data: ChartData::Bars {
            labels: a.subjects.clone(),
            values: a.subject_stats.iter().map(|s| s.summary.mean).collect(),
        },
    };
    let boxes = ChartArtifact {
        kind: ChartKind::SubjectBoxes,
        title: "Subject Score Distribution".to_string(),
        file_stem: format!("{base}_Subject_Score_Distribution_Box"),
        data: ChartData::Boxes {
            boxes: a
                .subject_stats
                .iter()
                .map(|s| BoxSummary {
                    label: s.subject.clone(),
                    min: s.summary.min,
                    p25: s.summary.p25,
                    median: s.summary.median,
                    p75: s.summary.p75,
                    max: s.summary.max,
                })
                .collect(),
        },
    };
    vec![means, boxes]
}

fn distribution_charts(a: &Analysis, base: &str) -> Vec<ChartArtifact> {
    a.distributions
        .iter()
        .map(|d| ChartArtifact {
            kind: ChartKind::SubjectDistribution,
            title: format!("{} Score Distribution", d.subject),
            file_stem: format!("{base}_{}_Analysis", stem_part(&d.subject)),
            data: ChartData::Distribution {
                bins: d.histogram.clone(),
                mean: d.mean,
                pass_line: d.pass_line,
                bands: d.bands.clone(),
            },
        })
        .collect()
}

fn advanced_charts(a: &Analysis, base: &str) -> Vec<ChartArtifact> {
    let mut out = vec![ChartArtifact {
        kind: ChartKind::CorrelationHeatmap,
        title: "Subject Correlation Heatmap".to_string(),
        file_stem: format!("{base}_Subject_Correlation"),
        data: ChartData::Heatmap {
            labels: a.correlation.subjects.clone(),
            values: a.correlation.values.clone(),
        },
    }];

    if let Some(classes) = &a.class_averages {
        out.push(ChartArtifact {
            kind: ChartKind::ClassComparison,
            title: "Average Score Comparison by Class and Subject".to_string(),
            file_stem: format!("{base}_Class_Comparison"),
            data: ChartData::GroupedBars {
                groups: classes.iter().map(|c| c.class.clone()).collect(),
                series: a.subjects.clone(),
                values: classes.iter().map(|c| c.averages.clone()).collect(),
            },
        });
    }

    let radar: Vec<RadarSeries> = a
        .top(RADAR_TOP_N)
        .iter()
        .map(|s| RadarSeries {
            name: s.name.clone(),
            values: s.scores.iter().map(|&v| v as f64).collect(),
        })
        .collect();
    if !radar.is_empty() {
        out.push(ChartArtifact {
            kind: ChartKind::TopStudentRadar,
            title: format!("Top {} Students Grade Radar", radar.len()),
            file_stem: format!("{base}_Top_Students_Radar"),
            data: ChartData::Radar {
                axes: a.subjects.clone(),
                series: radar,
            },
        });
    }
    out
}

/// Chart set for the requested analyses. The total-score histogram comes
/// first and appears once even when several analyses are requested.
pub fn build_charts(a: &Analysis, kinds: &[AnalysisKind], base: &str) -> Vec<ChartArtifact> {
    let mut out = Vec::new();
    let wants = |k: AnalysisKind| kinds.contains(&k);
    if (wants(AnalysisKind::Subject) || wants(AnalysisKind::Distribution))
        && !a.total_histogram.is_empty()
    {
        out.push(total_histogram(a, base));
    }
    if wants(AnalysisKind::Subject) {
        out.extend(subject_charts(a, base));
    }
    if wants(AnalysisKind::Distribution) {
        out.extend(distribution_charts(a, base));
    }
    if wants(AnalysisKind::Advanced) {
        out.extend(advanced_charts(a, base));
    }
    out
}

pub fn write_charts(charts: &[ChartArtifact], out_dir: &Path) -> Result<Vec<PathBuf>, OutputError> {
    let mut paths = Vec::with_capacity(charts.len());
    for chart in charts {
        let path = out_dir.join(format!("{}.json", chart.file_stem));
        write_text(&path, &serde_json::to_string_pretty(chart)?)?;
        paths.push(path);
    }
    info!("wrote {} chart artifacts to {}", paths.len(), out_dir.display());
    Ok(paths)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/charts.rs"]
mod tests;
