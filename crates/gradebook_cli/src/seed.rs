//! Demo records for a first run.
//!
//! Each collection is seeded only when it is empty, so existing data is never
//! mixed with demo rows.

use gradebook_core::{Course, Professor, Registry, RegistryResult, Student};
use log::info;

pub fn seed_demo_data(registry: &mut Registry) -> RegistryResult<()> {
    if registry.courses().is_empty() {
        registry.add_course(
            Course::new("DATA200", "Data Science", "Intro to DS & Python").with_credits(3),
        )?;
        registry.add_course(
            Course::new("MATH101", "Calculus I", "Differential calculus").with_credits(4),
        )?;
    }
    if registry.professors().is_empty() {
        registry.add_professor(Professor::new(
            "micheal@mycsu.edu",
            "Micheal John",
            "Senior Professor",
            "DATA200",
        ))?;
        registry.add_professor(Professor::new(
            "alice@mycsu.edu",
            "Alice Smith",
            "Assistant Professor",
            "MATH101",
        ))?;
    }
    if registry.students().is_empty() {
        registry.add_student(
            Student::new("sam@mycsu.edu", "Sam", "Carpenter", "DATA200", Some(96)).with_grade("A"),
        )?;
        registry.add_student(Student::new(
            "jane@mycsu.edu",
            "Jane",
            "Lopez",
            "DATA200",
            Some(88),
        ))?;
        registry.add_student(Student::new(
            "bob@mycsu.edu",
            "Bob",
            "Nguyen",
            "MATH101",
            Some(73),
        ))?;
    }
    if registry.credentials().is_empty() {
        registry.register_user("micheal@mycsu.edu", "Welcome12#_", "professor");
    }
    info!(
        "event=seed module=cli status=ok students={} courses={} professors={}",
        registry.student_count(),
        registry.courses().len(),
        registry.professors().len()
    );
    Ok(())
}
