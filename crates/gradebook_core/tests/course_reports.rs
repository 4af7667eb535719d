use gradebook_core::{
    render_course_report, render_professor_report, render_student_report, Course, CourseStats,
    CourseUpdate, Professor, ProfessorUpdate, RecordKind, Registry, RegistryError, Student,
};

fn campus() -> Registry {
    let mut registry = Registry::new();
    registry
        .add_course(Course::new("DATA200", "Data Science", "Intro DS"))
        .unwrap();
    registry
        .add_course(Course::new("CS146", "Data Structures", "DS & Algos").with_credits(4))
        .unwrap();
    registry
        .add_professor(Professor::new(
            "micheal@mycsu.edu",
            "Micheal John",
            "Senior Professor",
            "DATA200",
        ))
        .unwrap();
    registry
        .add_professor(Professor::new(
            "dev@mycsu.edu",
            "Dev Patel",
            "Associate Professor",
            "CS146",
        ))
        .unwrap();

    for (email, course, marks) in [
        ("a@x.edu", "DATA200", Some(70)),
        ("b@x.edu", "CS146", Some(55)),
        ("c@x.edu", "DATA200", Some(90)),
        ("d@x.edu", "DATA200", Some(80)),
        ("e@x.edu", "DATA200", None),
    ] {
        registry
            .add_student(Student::new(email, "F", "L", course, marks))
            .unwrap();
    }
    registry
}

#[test]
fn course_stats_over_marked_students() {
    let registry = campus();
    let stats = registry.course_stats("DATA200");
    assert_eq!(
        stats,
        CourseStats {
            count: 3,
            average: Some(80.0),
            median: Some(80.0),
        }
    );
}

#[test]
fn course_stats_for_course_without_students_is_empty() {
    let mut registry = campus();
    registry
        .add_course(Course::new("MATH101", "Calculus I", "Differential calculus"))
        .unwrap();
    let stats = registry.course_stats("MATH101");
    assert_eq!(stats.count, 0);
    assert_eq!(stats.average, None);
    assert_eq!(stats.median, None);
    assert_eq!(registry.course_stats("NOPE"), CourseStats::empty());
}

#[test]
fn course_stats_serialize_with_null_for_missing_values() {
    let json = serde_json::to_value(CourseStats::empty()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "count": 0, "average": null, "median": null })
    );
}

#[test]
fn report_by_course_keeps_sequence_order() {
    let registry = campus();
    let emails: Vec<String> = registry
        .report_by_course("DATA200")
        .into_iter()
        .map(|s| s.email_address)
        .collect();
    assert_eq!(emails, vec!["a@x.edu", "c@x.edu", "d@x.edu", "e@x.edu"]);
}

#[test]
fn report_by_professor_follows_taught_course() {
    let registry = campus();
    let students = registry.report_by_professor("micheal@mycsu.edu");
    assert_eq!(students.len(), 4);
    assert!(students.iter().all(|s| s.course_id == "DATA200"));
    assert!(registry.report_by_professor("ghost@mycsu.edu").is_empty());
}

#[test]
fn report_by_professor_follows_reassigned_course() {
    let mut registry = campus();
    assert!(registry.update_professor(
        "dev@mycsu.edu",
        &ProfessorUpdate {
            course_id: Some("DATA200".to_string()),
            ..ProfessorUpdate::default()
        }
    ));
    let students = registry.report_by_professor("dev@mycsu.edu");
    assert_eq!(students.len(), 4);
}

#[test]
fn report_by_student_uses_index() {
    let registry = campus();
    assert_eq!(
        registry.report_by_student("c@x.edu").map(|s| s.marks),
        Some(Some(90))
    );
    assert!(registry.report_by_student("zzz@x.edu").is_none());
}

#[test]
fn rendered_reports_list_matching_rows() {
    let registry = campus();
    let course = render_course_report(&registry, "CS146");
    assert_eq!(course.lines().count(), 3);
    assert!(course.contains("b@x.edu"));

    let professor = render_professor_report(&registry, "micheal@mycsu.edu");
    assert_eq!(professor.lines().count(), 6);

    assert_eq!(render_student_report(&registry, "zzz@x.edu"), "Student not found.");
    assert!(render_student_report(&registry, "a@x.edu").contains("C-"));
}

#[test]
fn course_and_professor_crud() {
    let mut registry = campus();

    assert!(registry.update_course(
        "DATA200",
        &CourseUpdate {
            description: Some("Updated desc".to_string()),
            ..CourseUpdate::default()
        }
    ));
    let course = registry.get_course("DATA200").unwrap();
    assert_eq!(course.description, "Updated desc");
    assert_eq!(course.credits, 3);

    assert!(registry.update_professor(
        "micheal@mycsu.edu",
        &ProfessorUpdate {
            rank: Some("Distinguished Professor".to_string()),
            ..ProfessorUpdate::default()
        }
    ));
    assert_eq!(
        registry.get_professor("micheal@mycsu.edu").unwrap().rank,
        "Distinguished Professor"
    );

    assert!(registry.delete_course("CS146"));
    assert!(!registry.delete_course("CS146"));
    assert!(registry.delete_professor("dev@mycsu.edu"));
    assert!(!registry.update_professor("dev@mycsu.edu", &ProfessorUpdate::default()));
    assert!(!registry.update_course("CS146", &CourseUpdate::default()));

    // Soft references: deleting a course leaves its students alone.
    assert_eq!(registry.report_by_course("CS146").len(), 1);
}

#[test]
fn duplicate_and_empty_course_and_professor_ids_fail() {
    let mut registry = campus();
    assert_eq!(
        registry.add_course(Course::new("DATA200", "Again", "")),
        Err(RegistryError::DuplicateKey {
            kind: RecordKind::Course,
            id: "DATA200".to_string(),
        })
    );
    assert!(registry.add_course(Course::new("", "Nameless", "")).is_err());
    assert!(matches!(
        registry.add_professor(Professor::new("dev@mycsu.edu", "Dup", "", "CS146")),
        Err(RegistryError::DuplicateKey {
            kind: RecordKind::Professor,
            ..
        })
    ));
    assert!(registry
        .add_professor(Professor::new("", "Nameless", "", "CS146"))
        .is_err());
    assert_eq!(registry.courses().len(), 2);
    assert_eq!(registry.professors().len(), 2);
}
