use transcript_core::{
    GradeEntry, InMemoryTranscriptRepository, RepoError, RepoErrorKind, Student,
    TranscriptRepository, TranscriptService,
};

fn new_service() -> TranscriptService<InMemoryTranscriptRepository> {
    let service = TranscriptService::new(InMemoryTranscriptRepository::new());
    service.initialize();
    assert!(service.get_all().is_empty());
    service
}

#[test]
fn add_student_returns_sequential_ids_starting_at_one() {
    let service = new_service();

    let ids: Vec<_> = ["avery", "ripley", "avery", "kai"]
        .into_iter()
        .map(|name| service.add_student(name))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn new_student_has_empty_transcript() {
    let service = new_service();

    let id = service.add_student("avery");
    assert_eq!(id, 1);

    let transcript = service.get_transcript(id).unwrap();
    assert_eq!(transcript.student, Student::new(1, "avery"));
    assert!(transcript.grades.is_empty());
}

#[test]
fn add_grade_then_get_grade_roundtrips() {
    let service = new_service();

    let id = service.add_student("t");
    service.add_grade(id, "CS", 100.0).unwrap();
    service.add_grade(id, "Math", 90.0).unwrap();

    assert_eq!(service.get_grade(id, "CS").unwrap(), 100.0);
    assert_eq!(service.get_grade(id, "Math").unwrap(), 90.0);
}

#[test]
fn grades_keep_insertion_order_on_transcript() {
    let service = new_service();

    let id = service.add_student("t");
    service.add_grade(id, "Math", 90.0).unwrap();
    service.add_grade(id, "CS", 100.0).unwrap();
    service.add_grade(id, "Art", 72.5).unwrap();

    let transcript = service.get_transcript(id).unwrap();
    assert_eq!(
        transcript.grades,
        vec![
            GradeEntry::new("Math", 90.0),
            GradeEntry::new("CS", 100.0),
            GradeEntry::new("Art", 72.5),
        ]
    );
}

#[test]
fn add_grade_targets_correct_student() {
    let service = new_service();

    let first = service.add_student("test student 1");
    let second = service.add_student("test student 2");
    service.add_grade(second, "test course", 100.0).unwrap();

    assert_eq!(service.get_grade(second, "test course").unwrap(), 100.0);
    let err = service.get_grade(first, "test course").unwrap_err();
    assert!(matches!(err, RepoError::UnknownCourse { student_id, .. } if student_id == first));
}

#[test]
fn add_grade_unknown_student_is_invalid_reference_and_changes_nothing() {
    let service = new_service();
    let id = service.add_student("avery");
    let before = service.get_all();

    let err = service.add_grade(id + 1, "CS", 100.0).unwrap_err();
    assert!(matches!(err, RepoError::UnknownStudent(missing) if missing == id + 1));
    assert_eq!(err.kind(), RepoErrorKind::InvalidReference);
    assert_eq!(service.get_all(), before);
}

#[test]
fn add_grade_on_empty_store_fails() {
    let service = new_service();

    let err = service.add_grade(1, "test course", 100.0).unwrap_err();
    assert_eq!(err.kind(), RepoErrorKind::InvalidReference);
    assert_eq!(service.student_count(), 0);
}

#[test]
fn duplicate_grade_is_rejected_and_first_value_kept() {
    let service = new_service();

    let id = service.add_student("test student");
    service.add_grade(id, "test course", 100.0).unwrap();

    let err = service.add_grade(id, "test course", 80.0).unwrap_err();
    assert!(matches!(
        &err,
        RepoError::DuplicateGrade { student_id, course }
            if *student_id == id && course == "test course"
    ));
    assert_eq!(err.kind(), RepoErrorKind::DuplicateEntry);
    assert_eq!(service.get_grade(id, "test course").unwrap(), 100.0);
    assert_eq!(service.get_transcript(id).unwrap().grades.len(), 1);
}

#[test]
fn get_grade_errors_for_missing_course_and_missing_student() {
    let service = new_service();

    let id = service.add_student("test student");
    let course_err = service.get_grade(id, "test course").unwrap_err();
    assert_eq!(course_err.kind(), RepoErrorKind::InvalidReference);

    let student_err = service.get_grade(0, "test course").unwrap_err();
    assert!(matches!(student_err, RepoError::UnknownStudent(0)));
}

#[test]
fn get_student_ids_matches_exact_names_in_creation_order() {
    let service = new_service();

    let avery1 = service.add_student("avery");
    let avery2 = service.add_student("avery");
    let ripley = service.add_student("ripley");

    assert_eq!(service.get_student_ids("avery"), vec![avery1, avery2]);
    assert_eq!(service.get_student_ids("ripley"), vec![ripley]);
    assert_eq!(service.get_student_ids("Avery"), Vec::<u64>::new());
    assert!(service.get_student_ids("nobody").is_empty());
}

#[test]
fn get_student_ids_skips_deleted_students() {
    let service = new_service();

    let first = service.add_student("a");
    let second = service.add_student("a");
    service.delete_student(first).unwrap();

    assert_eq!(service.get_student_ids("a"), vec![second]);
}

#[test]
fn delete_student_removes_transcript_only_for_target() {
    let service = new_service();

    let first = service.add_student("test student 1");
    let second = service.add_student("test student 2");
    service.add_grade(first, "CS", 88.0).unwrap();
    let first_before = service.get_transcript(first).unwrap();

    service.delete_student(second).unwrap();

    assert!(service.get_transcript(second).is_none());
    assert_eq!(service.get_transcript(first).unwrap(), first_before);
    assert_eq!(service.student_count(), 1);
}

#[test]
fn delete_unknown_student_is_invalid_reference() {
    let service = new_service();

    let err = service.delete_student(10).unwrap_err();
    assert!(matches!(err, RepoError::UnknownStudent(10)));
    assert_eq!(err.kind(), RepoErrorKind::InvalidReference);
}

#[test]
fn delete_twice_fails_second_time() {
    let service = new_service();

    let id = service.add_student("avery");
    service.delete_student(id).unwrap();
    assert!(matches!(
        service.delete_student(id).unwrap_err(),
        RepoError::UnknownStudent(missing) if missing == id
    ));
}

#[test]
fn ids_are_not_reused_after_delete() {
    let service = new_service();

    let first = service.add_student("a");
    let second = service.add_student("b");
    service.delete_student(second).unwrap();
    service.delete_student(first).unwrap();

    assert_eq!(service.add_student("c"), 3);
}

#[test]
fn initialize_clears_store_and_resets_counter() {
    let service = new_service();

    service.add_student("a");
    let id = service.add_student("b");
    service.add_grade(id, "CS", 70.0).unwrap();

    service.initialize();
    assert!(service.get_all().is_empty());
    assert!(service.get_transcript(id).is_none());
    assert_eq!(service.add_student("c"), 1);

    service.initialize();
    service.initialize();
    assert_eq!(service.student_count(), 0);
}

#[test]
fn get_all_returns_every_transcript_in_creation_order() {
    let service = new_service();
    assert!(service.get_all().is_empty());

    for name in ["c", "a", "b"] {
        service.add_student(name);
    }

    let all = service.get_all();
    assert_eq!(all.len(), 3);
    let ids: Vec<_> = all.iter().map(|transcript| transcript.student_id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(all[0].student.student_name, "c");
}

#[test]
fn get_transcript_returns_requested_student() {
    let service = new_service();

    service.add_student("test student 1");
    let second = service.add_student("test student 2");

    let transcript = service.get_transcript(second).unwrap();
    assert_eq!(transcript.student.student_id, second);
    assert_eq!(transcript.student.student_name, "test student 2");
}

#[test]
fn returned_transcripts_are_snapshots() {
    let service = new_service();

    let id = service.add_student("avery");
    let mut snapshot = service.get_transcript(id).unwrap();
    snapshot.grades.push(GradeEntry::new("CS", 1.0));

    assert!(service.get_transcript(id).unwrap().grades.is_empty());
}

#[test]
fn service_can_borrow_a_shared_repository() {
    let repo = InMemoryTranscriptRepository::default();
    let service = TranscriptService::new(&repo);

    let id = service.add_student("avery");
    service.add_grade(id, "CS", 95.0).unwrap();

    assert_eq!(repo.get_grade(id, "CS").unwrap(), 95.0);
    assert_eq!(repo.find_student_ids("avery"), vec![id]);
}

#[test]
fn repository_survives_concurrent_student_creation() {
    let repo = InMemoryTranscriptRepository::new();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..25 {
                    repo.create_student("worker");
                }
            });
        }
    });

    let ids = repo.find_student_ids("worker");
    assert_eq!(ids, (1..=100).collect::<Vec<u64>>());
}

#[test]
fn error_messages_name_the_missing_reference() {
    let service = new_service();
    let id = service.add_student("avery");

    assert_eq!(
        service.delete_student(42).unwrap_err().to_string(),
        "student not found: 42"
    );
    assert_eq!(
        service.get_grade(id, "CS").unwrap_err().to_string(),
        "course `CS` not found on transcript 1"
    );
}
