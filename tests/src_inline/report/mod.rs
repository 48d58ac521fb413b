use super::*;
use chrono::NaiveDate;

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(14, 7, 9)
        .unwrap()
}

#[test]
fn test_formatting_helpers() {
    assert_eq!(format_f64_2(85.456), "85.46");
    assert_eq!(format_f64_2(f64::NAN), "n/a");
    assert_eq!(format_rate(0.755), "75.50%");
    assert_eq!(format_rate(0.0), "0.00%");
}

#[test]
fn test_timestamps() {
    assert_eq!(format_timestamp(&ts()), "2024-03-05 14:07:09");
    assert_eq!(
        default_base_name(&ts()),
        "Grade_Analysis_Results_20240305_140709"
    );
}

fn sample_analysis() -> Analysis {
    use crate::model::table::{IdentityColumn, ScoreTable, StudentRow, TableSchema};

    let schema = TableSchema::new(
        vec![IdentityColumn::Name],
        vec!["Mathematics".to_string()],
    )
    .unwrap();
    let rows = [72, 95, 58]
        .iter()
        .enumerate()
        .map(|(i, &s)| StudentRow {
            identity: vec![format!("Student {}", i + 1)],
            scores: vec![s],
        })
        .collect();
    crate::stats::run_analysis(&ScoreTable::new(schema, rows).unwrap())
}

#[test]
fn test_write_reports_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let analysis = sample_analysis();
    let ctx = ReportContext {
        tool_name: "kira-gradeqc".to_string(),
        tool_version: "0.1.0".to_string(),
        generated_at: ts(),
        source: Some("grades.csv".to_string()),
        analysis: &analysis,
    };
    let paths = write_reports(&ctx, dir.path()).unwrap();
    assert_eq!(paths.report, dir.path().join("report.txt"));

    let text = std::fs::read_to_string(&paths.report).unwrap();
    assert!(text.starts_with(REPORT_TITLE));
    assert!(text.contains("Source: grades.csv"));

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.summary).unwrap()).unwrap();
    assert_eq!(summary["tool"], "kira-gradeqc");
    assert_eq!(summary["generated_at"], "2024-03-05 14:07:09");
    assert_eq!(summary["record_count"], 3);
    assert_eq!(summary["subjects"][0], "Mathematics");
    assert_eq!(summary["top_students"][0]["name"], "Student 2");
    assert_eq!(summary["top_students"][0]["rank"], 1);
    assert_eq!(summary["total_score"]["max"], 95.0);
    assert_eq!(summary["conclusions"]["overall_average"], 75.0);
    assert_eq!(summary["conclusions"]["best_subject"], "Mathematics");
    assert_eq!(summary["conclusions"]["worst_subject"], "Mathematics");
    let rate = summary["conclusions"]["overall_pass_rate"].as_f64().unwrap();
    assert!((rate - 2.0 / 3.0).abs() < 1e-12);
}
