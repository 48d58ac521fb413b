use crate::report::{REPORT_TITLE, ReportContext, format_f64_2, format_rate, format_timestamp};
use crate::stats::Describe;
use crate::stats::analysis::REPORT_TOP_N;

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let a = ctx.analysis;
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(REPORT_TITLE.len()));
    out.push_str("\n\n");
    out.push_str(&format!(
        "Generated: {}\n",
        format_timestamp(&ctx.generated_at)
    ));
    out.push_str(&format!("Tool: {} {}\n", ctx.tool_name, ctx.tool_version));
    if let Some(source) = &ctx.source {
        out.push_str(&format!("Source: {}\n", source));
    }
    out.push('\n');

    out.push_str("1. Basic information\n");
    out.push_str(&format!("Total records: {}\n", a.record_count));
    if let Some(n) = a.distinct_names {
        out.push_str(&format!("Student count: {}\n", n));
    }
    out.push_str(&format!("Subjects: {}\n\n", a.subjects.join(", ")));

    out.push_str("2. Subject statistics\n");
    for s in &a.subject_stats {
        out.push_str(&format!("{}:\n", s.subject));
        push_describe(&mut out, &s.summary);
        out.push_str(&format!("  Pass rate (>=60): {}\n", format_rate(s.pass_rate)));
        out.push_str(&format!(
            "  Excellent rate (>=90): {}\n",
            format_rate(s.excellent_rate)
        ));
    }
    out.push('\n');

    out.push_str("3. Total score statistics\n");
    push_describe(&mut out, &a.total_summary);
    out.push_str(&format!(
        "  Average of per-student averages: {}\n\n",
        format_f64_2(a.average_summary.mean)
    ));

    out.push_str(&format!("4. Top {} students by total score\n", REPORT_TOP_N));
    for (i, s) in a.top(REPORT_TOP_N).iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} - Total: {}, Average: {}, Rank: {}\n",
            i + 1,
            s.name,
            s.total,
            format_f64_2(s.average),
            s.rank
        ));
    }

    if let Some(classes) = &a.class_averages {
        out.push_str("\n5. Class comparison (mean per subject)\n");
        for c in classes {
            let parts: Vec<String> = a
                .subjects
                .iter()
                .zip(&c.averages)
                .map(|(name, v)| format!("{}={}", name, format_f64_2(*v)))
                .collect();
            out.push_str(&format!(
                "{} ({} students): {}\n",
                c.class,
                c.students,
                parts.join(", ")
            ));
        }
    }

    if let Some(c) = &a.conclusions {
        out.push_str("\nAnalysis conclusions\n");
        out.push_str(&format!(
            "1. Overall subject average: {}\n",
            format_f64_2(c.overall_average)
        ));
        out.push_str(&format!(
            "2. Best performing subject: {} ({})\n",
            c.best_subject,
            format_f64_2(c.best_mean)
        ));
        out.push_str(&format!(
            "3. Subject needing improvement: {} ({})\n",
            c.worst_subject,
            format_f64_2(c.worst_mean)
        ));
        out.push_str(&format!(
            "4. Overall pass rate: {}\n",
            format_rate(c.overall_pass_rate)
        ));
    }

    out
}

fn push_describe(out: &mut String, d: &Describe) {
    out.push_str(&format!("  Average: {}\n", format_f64_2(d.mean)));
    out.push_str(&format!("  Median: {}\n", format_f64_2(d.median)));
    out.push_str(&format!("  Standard deviation: {}\n", format_f64_2(d.std)));
    out.push_str(&format!("  Minimum: {}\n", d.min));
    out.push_str(&format!("  Maximum: {}\n", d.max));
    out.push_str(&format!("  25th percentile: {}\n", format_f64_2(d.p25)));
    out.push_str(&format!("  75th percentile: {}\n", format_f64_2(d.p75)));
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
