use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::model::subject::builtin_subjects;

#[test]
fn test_end_to_end_ten_students_one_subject() {
    let request = GenerationRequest::new(
        10,
        vec![SubjectSpec::new("Mathematics", 0, 100, 60, 0.5)],
    );
    for seed in 0..100u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let table = generate_table(&request, &mut rng).unwrap();
        assert_eq!(table.n_rows(), 10);
        let scores = table.subject_scores(0);
        assert!(scores.iter().all(|v| (0..=100).contains(v)));
        assert!(scores.iter().filter(|&&v| v >= 60).count() >= 5);
    }
}

#[test]
fn test_identity_columns_and_ids() {
    let mut request = GenerationRequest::new(3, builtin_subjects());
    request.id_prefix = "2024".to_string();
    request.class_assignment = ClassAssignment::Fixed("Grade 12(3)".to_string());
    let table = generate_table(&request, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();

    assert_eq!(table.schema().identity, IdentityColumn::all().to_vec());
    assert_eq!(table.n_subjects(), 13);
    for row in 0..3 {
        assert_eq!(
            table.identity_value(row, IdentityColumn::Number),
            Some((row + 1).to_string().as_str())
        );
        assert_eq!(
            table.identity_value(row, IdentityColumn::StudentId),
            Some(format!("2024{:04}", row + 1).as_str())
        );
        assert_eq!(
            table.identity_value(row, IdentityColumn::Class),
            Some("Grade 12(3)")
        );
    }
}

#[test]
fn test_same_seed_same_table() {
    let request = GenerationRequest::new(20, builtin_subjects());
    let a = generate_table(&request, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    let b = generate_table(&request, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_rejects_invalid_requests() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let zero = GenerationRequest::new(0, builtin_subjects());
    assert!(matches!(
        generate_table(&zero, &mut rng),
        Err(GenerateError::NoStudents)
    ));

    let empty = GenerationRequest::new(5, vec![]);
    assert!(matches!(
        generate_table(&empty, &mut rng),
        Err(GenerateError::NoSubjects)
    ));

    let dup = GenerationRequest::new(
        5,
        vec![
            SubjectSpec::with_defaults("Physics"),
            SubjectSpec::with_defaults("Physics"),
        ],
    );
    assert!(matches!(
        generate_table(&dup, &mut rng),
        Err(GenerateError::DuplicateSubject(name)) if name == "Physics"
    ));

    let bad_rate = GenerationRequest::new(5, vec![SubjectSpec::new("Art", 0, 100, 60, 1.2)]);
    assert!(matches!(
        generate_table(&bad_rate, &mut rng),
        Err(GenerateError::InvalidPassRate { .. })
    ));

    let blank = GenerationRequest::new(5, vec![SubjectSpec::with_defaults("  ")]);
    assert!(matches!(
        generate_table(&blank, &mut rng),
        Err(GenerateError::EmptySubjectName)
    ));
}

#[test]
fn test_reserved_subject_name_rejected() {
    let request = GenerationRequest::new(2, vec![SubjectSpec::with_defaults("Total Score")]);
    assert!(matches!(
        generate_table(&request, &mut ChaCha8Rng::seed_from_u64(0)),
        Err(GenerateError::Table(TableError::DuplicateColumn(_)))
    ));
}

#[test]
fn test_rejects_score_range_beyond_limit() {
    let request = GenerationRequest::new(
        5,
        vec![SubjectSpec::new("Mathematics", 0, i64::MAX, 60, 0.5)],
    );
    let err = generate_table(&request, &mut ChaCha8Rng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, GenerateError::ScoreRange { subject, .. } if subject == "Mathematics"));
}
