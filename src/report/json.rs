use serde::Serialize;

use crate::report::{ReportContext, format_timestamp};
use crate::stats::Describe;
use crate::stats::analysis::{REPORT_TOP_N, RankedStudent};
use crate::stats::subject::{Conclusions, SubjectStats};

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: &'a str,
    version: &'a str,
    generated_at: String,
    source: Option<&'a str>,
    record_count: usize,
    distinct_names: Option<usize>,
    subjects: &'a [String],
    subject_stats: &'a [SubjectStats],
    total_score: &'a Describe,
    average_score: &'a Describe,
    top_students: &'a [RankedStudent],
    conclusions: Option<&'a Conclusions>,
}

pub fn render_summary_json(ctx: &ReportContext<'_>) -> Result<String, serde_json::Error> {
    let a = ctx.analysis;
    let summary = Summary {
        tool: &ctx.tool_name,
        version: &ctx.tool_version,
        generated_at: format_timestamp(&ctx.generated_at),
        source: ctx.source.as_deref(),
        record_count: a.record_count,
        distinct_names: a.distinct_names,
        subjects: &a.subjects,
        subject_stats: &a.subject_stats,
        total_score: &a.total_summary,
        average_score: &a.average_summary,
        top_students: a.top(REPORT_TOP_N),
        conclusions: a.conclusions.as_ref(),
    };
    serde_json::to_string_pretty(&summary)
}
