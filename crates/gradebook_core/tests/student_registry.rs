use gradebook_core::{classify, RecordKind, Registry, RegistryError, Student, StudentUpdate};

fn seeded_registry(count: usize) -> Registry {
    let mut registry = Registry::new();
    for i in 0..count {
        let course_id = if i % 2 == 0 { "DATA200" } else { "CS146" };
        let marks = 40 + ((i * 37) % 61) as i32;
        registry
            .add_student(Student::new(
                format!("student{i}@sjsu.edu"),
                "First",
                "Last",
                course_id,
                Some(marks),
            ))
            .unwrap();
    }
    registry
}

#[test]
fn add_derives_grade_from_marks_when_blank() {
    let mut registry = Registry::new();
    registry
        .add_student(Student::new("a@x.edu", "A", "B", "C1", Some(96)))
        .unwrap();

    assert_eq!(classify(96).as_str(), "A");
    let stored = registry.get_student("a@x.edu").unwrap();
    assert_eq!(stored.grade, "A");
}

#[test]
fn add_keeps_explicit_grade() {
    let mut registry = Registry::new();
    let sam = Student::new("sam@mycsu.edu", "Sam", "Carpenter", "DATA200", Some(40))
        .with_grade("A");
    registry.add_student(sam).unwrap();
    assert_eq!(registry.get_student("sam@mycsu.edu").unwrap().grade, "A");
}

#[test]
fn add_without_marks_leaves_grade_blank() {
    let mut registry = Registry::new();
    registry
        .add_student(Student::new("n@x.edu", "N", "M", "C1", None))
        .unwrap();
    assert_eq!(registry.get_student("n@x.edu").unwrap().grade, "");
}

#[test]
fn add_duplicate_email_fails_and_keeps_original() {
    let mut registry = Registry::new();
    registry
        .add_student(Student::new("a@x.edu", "A", "B", "C1", Some(80)))
        .unwrap();

    let err = registry
        .add_student(Student::new("a@x.edu", "Other", "Person", "C2", Some(10)))
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateKey {
            kind: RecordKind::Student,
            id: "a@x.edu".to_string(),
        }
    );
    assert_eq!(registry.student_count(), 1);
    assert_eq!(registry.get_student("a@x.edu").unwrap().first_name, "A");
    assert!(registry.index_is_consistent());
}

#[test]
fn student_crud_roundtrip() {
    let mut registry = seeded_registry(50);
    let email = "newstudent@sjsu.edu";
    assert_eq!(registry.student_position(email), None);

    registry
        .add_student(Student::new(email, "New", "Student", "DATA200", Some(81)))
        .unwrap();
    assert_eq!(registry.student_position(email), Some(50));
    assert_eq!(registry.get_student(email).unwrap().grade, "B-");

    assert!(registry.update_student(email, &StudentUpdate::marks(95)));
    let updated = registry.search_student_indexed(email).student.unwrap();
    assert_eq!(updated.grade, classify(95).as_str());

    assert!(registry.delete_student(email));
    assert!(registry.search_student_indexed(email).student.is_none());
    assert!(!registry.delete_student(email));
}

#[test]
fn update_applies_only_present_fields() {
    let mut registry = Registry::new();
    registry
        .add_student(Student::new("a@x.edu", "A", "B", "C1", Some(75)))
        .unwrap();

    let update = StudentUpdate {
        last_name: Some("Brown".to_string()),
        course_id: Some("C9".to_string()),
        ..StudentUpdate::default()
    };
    assert!(registry.update_student("a@x.edu", &update));

    let student = registry.get_student("a@x.edu").unwrap();
    assert_eq!(student.first_name, "A");
    assert_eq!(student.last_name, "Brown");
    assert_eq!(student.course_id, "C9");
    assert_eq!(student.marks, Some(75));
    assert_eq!(student.grade, "C");
}

#[test]
fn delete_then_both_searches_report_not_found() {
    let mut registry = Registry::new();
    registry
        .add_student(Student::new("a@x.edu", "A", "B", "C1", Some(96)))
        .unwrap();
    assert!(registry.delete_student("a@x.edu"));

    assert!(!registry.search_student_indexed("a@x.edu").is_found());
    assert!(!registry.search_student_linear("a@x.edu").is_found());
}

#[test]
fn index_mirrors_sequence_after_mixed_mutations() {
    let mut registry = seeded_registry(200);

    // Deterministic pseudo-random walk over deletes, updates and re-adds.
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for step in 0..400 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let target = format!("student{}@sjsu.edu", state % 260);
        match step % 3 {
            0 => {
                registry.delete_student(&target);
            }
            1 => {
                registry.update_student(&target, &StudentUpdate::marks((state % 101) as i32));
            }
            _ => {
                let _ = registry.add_student(Student::new(target, "Re", "Added", "C1", Some(70)));
            }
        }
        assert!(registry.index_is_consistent(), "step {step}");
    }

    for (position, student) in registry.students().iter().enumerate() {
        assert_eq!(registry.student_position(&student.email_address), Some(position));
    }
}

#[test]
fn empty_registry_supports_every_read() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert!(registry.get_student("x").is_none());
    assert!(!registry.search_student_linear("x").is_found());
    assert!(!registry.search_student_indexed("x").is_found());
    assert_eq!(registry.course_stats("DATA200").count, 0);
    assert!(registry.report_by_course("DATA200").is_empty());
    assert!(registry.report_by_professor("p@x.edu").is_empty());
    assert!(!registry.login("u@x.edu", "pw"));
    assert!(registry.index_is_consistent());
}
