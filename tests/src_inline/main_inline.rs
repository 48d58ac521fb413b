use super::*;
use crate::input::load_table;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("kira-gradeqc").chain(args.iter().copied())).unwrap()
}

fn generate_args(dir: &Path, seed: u64, name: &str) -> GenerateArgs {
    GenerateArgs {
        count: 30,
        id_prefix: None,
        class: None,
        subjects: vec!["Mathematics".to_string(), "Physics".to_string()],
        profile: None,
        seed: Some(seed),
        out: dir.join(name),
        with_derived: false,
    }
}

#[test]
fn test_parse_generate() {
    let cli = parse(&[
        "generate",
        "--count",
        "50",
        "--subjects",
        "Mathematics,Physics",
        "--seed",
        "42",
        "--out",
        "grades.xlsx",
        "--with-derived",
        "-v",
    ]);
    assert!(cli.verbose);
    match cli.command {
        Command::Generate(args) => {
            assert_eq!(args.count, 50);
            assert_eq!(args.subjects, vec!["Mathematics", "Physics"]);
            assert_eq!(args.seed, Some(42));
            assert!(args.with_derived);
            assert_eq!(args.out, PathBuf::from("grades.xlsx"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_analyze_defaults() {
    let cli = parse(&["analyze", "--input", "grades.csv", "--out", "results"]);
    match cli.command {
        Command::Analyze(args) => {
            assert_eq!(args.format, ResultsFormat::Xlsx);
            assert!(!args.no_charts);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    let cli = parse(&["analyze", "-i", "g.csv", "-o", "r", "--format", "csv", "--no-charts"]);
    match cli.command {
        Command::Analyze(args) => {
            assert_eq!(args.format, ResultsFormat::Csv);
            assert!(args.no_charts);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_missing_out() {
    let result = Cli::try_parse_from(["kira-gradeqc", "generate", "--count", "5"]);
    assert!(result.is_err());
}

#[test]
fn test_generate_is_deterministic_per_seed() {
    let dir = tempfile::tempdir().unwrap();
    run_generate(&generate_args(dir.path(), 42, "a.csv")).unwrap();
    run_generate(&generate_args(dir.path(), 42, "b.csv")).unwrap();
    let a = std::fs::read_to_string(dir.path().join("a.csv")).unwrap();
    let b = std::fs::read_to_string(dir.path().join("b.csv")).unwrap();
    assert_eq!(a, b);

    let table = load_table(&dir.path().join("a.csv")).unwrap();
    assert_eq!(table.n_rows(), 30);
    assert_eq!(table.schema().subjects, vec!["Mathematics", "Physics"]);
    for s in 0..table.n_subjects() {
        let passes = table.subject_scores(s).iter().filter(|&&v| v >= 60).count();
        assert!(passes >= 18);
    }
}

#[test]
fn test_generate_rejects_unknown_subject() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = generate_args(dir.path(), 1, "x.csv");
    args.subjects = vec!["Astronomy".to_string()];
    let err = run_generate(&args).unwrap_err();
    assert!(matches!(err, AppError::Config(ConfigError::UnknownSubject(_))));
    assert!(!args.out.exists());
}

#[test]
fn test_generate_with_profile_and_fixed_class() {
    let dir = tempfile::tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    std::fs::write(
        &profile,
        r#"{"id_prefix": "2031", "subjects": [{"name": "Chemistry", "pass_rate": 100}]}"#,
    )
    .unwrap();
    let mut args = generate_args(dir.path(), 5, "p.csv");
    args.subjects.clear();
    args.profile = Some(profile);
    args.class = Some("Grade 12(5)".to_string());
    run_generate(&args).unwrap();

    let table = load_table(&args.out).unwrap();
    assert_eq!(table.schema().subjects, vec!["Chemistry"]);
    assert!(table.subject_scores(0).iter().all(|&v| v >= 60));
    assert_eq!(
        table.identity_value(0, model::table::IdentityColumn::StudentId),
        Some("20310001")
    );
    assert!(
        (0..table.n_rows())
            .all(|r| table.identity_value(r, model::table::IdentityColumn::Class)
                == Some("Grade 12(5)"))
    );
}

#[test]
fn test_analyze_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let gen_args = generate_args(dir.path(), 7, "grades.xlsx");
    run_generate(&gen_args).unwrap();

    let out = dir.path().join("results");
    let outputs = run_analyze(&AnalyzeArgs {
        input: gen_args.out.clone(),
        out: out.clone(),
        format: ResultsFormat::Csv,
        no_charts: false,
    })
    .unwrap();
    assert!(outputs.results.exists());
    assert_eq!(
        outputs.results.extension().and_then(|e| e.to_str()),
        Some("csv")
    );
    assert!(outputs.report.exists());
    assert!(outputs.summary.exists());
    assert!(!outputs.charts.is_empty());
    assert!(outputs.charts.iter().all(|p| p.starts_with(&out)));
}

#[test]
fn test_analyze_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_analyze(&AnalyzeArgs {
        input: dir.path().join("nope.csv"),
        out: dir.path().join("out"),
        format: ResultsFormat::Xlsx,
        no_charts: true,
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Session(SessionError::Input(_))));
}

#[test]
fn test_convert_csv_to_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    let gen_args = generate_args(dir.path(), 3, "grades.csv");
    run_generate(&gen_args).unwrap();
    let out = dir.path().join("grades.xlsx");
    let written = run_convert(&ConvertArgs {
        input: gen_args.out.clone(),
        out: Some(out.clone()),
        with_derived: true,
    })
    .unwrap();
    assert_eq!(written, out);
    assert_eq!(load_table(&out).unwrap(), load_table(&gen_args.out).unwrap());
}

#[test]
fn test_convert_without_out_rewrites_input() {
    let dir = tempfile::tempdir().unwrap();
    let gen_args = generate_args(dir.path(), 4, "grades.csv");
    run_generate(&gen_args).unwrap();
    let before = load_table(&gen_args.out).unwrap();

    let written = run_convert(&ConvertArgs {
        input: gen_args.out.clone(),
        out: None,
        with_derived: true,
    })
    .unwrap();
    assert_eq!(written, gen_args.out);
    let text = std::fs::read_to_string(&written).unwrap();
    assert!(text.lines().next().unwrap().ends_with(",Total Score,Average Score,Rank"));
    assert_eq!(load_table(&written).unwrap(), before);
}

#[test]
fn test_parse_convert_out_optional() {
    match parse(&["convert", "--input", "grades.csv"]).command {
        Command::Convert(args) => assert_eq!(args.out, None),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_render_subjects() {
    let text = render_subjects(&GeneratorProfile::builtin());
    assert_eq!(text.lines().count(), 13);
    assert!(text.starts_with("Ethics\t0-100\tpass >= 60\ttarget 60%\n"));
}
