use super::*;

fn schema() -> TableSchema {
    TableSchema::new(
        vec![IdentityColumn::StudentId, IdentityColumn::Name],
        vec!["Mathematics".to_string(), "Physics".to_string()],
    )
    .unwrap()
}

#[test]
fn test_header_lookup() {
    assert_eq!(
        IdentityColumn::from_header(" Student ID "),
        Some(IdentityColumn::StudentId)
    );
    assert_eq!(IdentityColumn::from_header("Mathematics"), None);
    assert_eq!(
        DerivedColumn::from_header("Average Score"),
        Some(DerivedColumn::AverageScore)
    );
    assert_eq!(DerivedColumn::from_header("Rank"), Some(DerivedColumn::Rank));
}

#[test]
fn test_schema_rejects_empty_and_duplicate_subjects() {
    assert_eq!(
        TableSchema::new(vec![IdentityColumn::Name], vec![]),
        Err(TableError::NoSubjects)
    );
    assert_eq!(
        TableSchema::new(
            vec![IdentityColumn::Name],
            vec!["Art".to_string(), "Art".to_string()]
        ),
        Err(TableError::DuplicateColumn("Art".to_string()))
    );
    assert_eq!(
        TableSchema::new(vec![], vec!["Rank".to_string()]),
        Err(TableError::DuplicateColumn("Rank".to_string()))
    );
    assert_eq!(
        TableSchema::new(
            vec![IdentityColumn::Name, IdentityColumn::Name],
            vec!["Art".to_string()]
        ),
        Err(TableError::DuplicateColumn("Name".to_string()))
    );
}

#[test]
fn test_headers_with_and_without_derived() {
    let s = schema();
    assert_eq!(
        s.headers(false),
        vec!["Student ID", "Name", "Mathematics", "Physics"]
    );
    assert_eq!(
        s.headers(true),
        vec![
            "Student ID",
            "Name",
            "Mathematics",
            "Physics",
            "Total Score",
            "Average Score",
            "Rank"
        ]
    );
}

#[test]
fn test_table_validates_row_widths() {
    let bad_identity = vec![StudentRow {
        identity: vec!["1".to_string()],
        scores: vec![1, 2],
    }];
    assert_eq!(
        ScoreTable::new(schema(), bad_identity),
        Err(TableError::IdentityWidth {
            row: 1,
            expected: 2,
            found: 1
        })
    );

    let bad_scores = vec![StudentRow {
        identity: vec!["1".to_string(), "A".to_string()],
        scores: vec![1],
    }];
    assert_eq!(
        ScoreTable::new(schema(), bad_scores),
        Err(TableError::ScoreWidth {
            row: 1,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_accessors_and_display_name() {
    let rows = vec![
        StudentRow {
            identity: vec!["S1".to_string(), "Mary Smith".to_string()],
            scores: vec![80, 70],
        },
        StudentRow {
            identity: vec!["S2".to_string(), String::new()],
            scores: vec![60, 95],
        },
    ];
    let table = ScoreTable::new(schema(), rows).unwrap();
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.n_subjects(), 2);
    assert_eq!(table.subject_scores(1), vec![70, 95]);
    assert_eq!(
        table.identity_value(0, IdentityColumn::StudentId),
        Some("S1")
    );
    assert_eq!(table.identity_value(0, IdentityColumn::Class), None);
    assert_eq!(table.display_name(0), "Mary Smith");
    assert_eq!(table.display_name(1), "S2");
}

#[test]
fn test_table_rejects_out_of_range_scores() {
    let rows = vec![StudentRow {
        identity: vec!["S1".to_string(), "A".to_string()],
        scores: vec![80, i64::MAX],
    }];
    assert_eq!(
        ScoreTable::new(schema(), rows),
        Err(TableError::ScoreOutOfRange {
            row: 1,
            column: "Physics".to_string(),
            score: i64::MAX,
        })
    );
    assert!(score_in_range(SCORE_LIMIT));
    assert!(!score_in_range(-SCORE_LIMIT - 1));
}
