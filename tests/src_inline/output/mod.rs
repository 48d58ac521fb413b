use super::*;
use crate::input::load_table;
use crate::model::table::{StudentRow, TableSchema};

fn table() -> ScoreTable {
    let schema = TableSchema::new(
        vec![
            IdentityColumn::Number,
            IdentityColumn::StudentId,
            IdentityColumn::Name,
            IdentityColumn::Class,
        ],
        vec!["Mathematics".to_string(), "Physics".to_string()],
    )
    .unwrap();
    let rows = vec![
        StudentRow {
            identity: vec![
                "1".to_string(),
                "20230001".to_string(),
                "Mary Smith".to_string(),
                "Grade 10(1)".to_string(),
            ],
            scores: vec![88, 61],
        },
        StudentRow {
            identity: vec![
                "2".to_string(),
                "20230002".to_string(),
                "John Brown".to_string(),
                "Grade 11(3)".to_string(),
            ],
            scores: vec![45, 100],
        },
    ];
    ScoreTable::new(schema, rows).unwrap()
}

#[test]
fn test_table_grid_with_derived() {
    let grid = table_grid(&table(), ExportOptions { with_derived: true });
    assert_eq!(
        grid.headers,
        vec![
            "No.",
            "Student ID",
            "Name",
            "Class",
            "Mathematics",
            "Physics",
            "Total Score",
            "Average Score",
            "Rank"
        ]
    );
    assert_eq!(grid.rows[0][0], Cell::Number(1.0));
    assert_eq!(grid.rows[0][1], Cell::Text("20230001".to_string()));
    assert_eq!(grid.rows[0][6], Cell::Number(149.0));
    assert_eq!(grid.rows[0][7], Cell::Number(74.5));
    assert_eq!(grid.rows[0][8], Cell::Number(1.0));
    assert_eq!(grid.rows[1][8], Cell::Number(2.0));
}

#[test]
fn test_table_grid_plain() {
    let grid = table_grid(&table(), ExportOptions::default());
    assert_eq!(grid.headers.len(), 6);
    assert!(grid.rows.iter().all(|r| r.len() == 6));
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(85.0), "85");
    assert_eq!(format_number(74.5), "74.5");
    assert_eq!(format_number(f64::NAN), "");
}

#[test]
fn test_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grades.csv");
    let original = table();
    write_table(&original, &path, ExportOptions { with_derived: true }).unwrap();
    let loaded = load_table(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_csv_gz_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grades.csv.gz");
    let original = table();
    write_table(&original, &path, ExportOptions::default()).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    assert_eq!(load_table(&path).unwrap(), original);
}

#[test]
fn test_xlsx_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grades.xlsx");
    let original = table();
    write_table(&original, &path, ExportOptions { with_derived: true }).unwrap();
    let loaded = load_table(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_unsupported_output_formats() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["grades.xls", "grades.txt", "grades.xlsx.gz"] {
        let path = dir.path().join(name);
        let err = write_table(&table(), &path, ExportOptions::default()).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedFormat(_)), "{name}");
        assert!(!path.exists());
    }
}

#[test]
fn test_write_atomic_failure_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    let err = write_atomic(&path, |w| {
        w.write_all(b"partial")?;
        Err(OutputError::UnsupportedFormat("boom".to_string()))
    })
    .unwrap_err();
    assert!(matches!(err, OutputError::UnsupportedFormat(_)));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_write_text_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.txt");
    write_text(&path, "hello\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
}
