//! Plain-text table rendering for student reports.

use crate::model::student::Student;
use crate::registry::Registry;

/// Header row shared by all student tables.
pub const STUDENT_TABLE_HEADER: &str =
    "Email                     | Name                    | Course   | Grd | Mk";

/// Message rendered when a single-student report has no match.
pub const STUDENT_NOT_FOUND: &str = "Student not found.";

/// Formats one student as a fixed-width table row.
pub fn render_student_row(student: &Student) -> String {
    let marks = student
        .marks
        .map(|value| value.to_string())
        .unwrap_or_default();
    format!(
        "{:25} | {:10} {:12} | {:8} | {:3} | {:>3}",
        student.email_address,
        student.first_name,
        student.last_name,
        student.course_id,
        student.grade,
        marks
    )
}

/// Header, separator and one row per student.
pub fn render_student_table(students: &[Student]) -> String {
    let mut lines = Vec::with_capacity(students.len() + 2);
    lines.push(STUDENT_TABLE_HEADER.to_string());
    lines.push("-".repeat(STUDENT_TABLE_HEADER.len()));
    lines.extend(students.iter().map(render_student_row));
    lines.join("\n")
}

pub fn render_course_report(registry: &Registry, course_id: &str) -> String {
    render_student_table(&registry.report_by_course(course_id))
}

pub fn render_professor_report(registry: &Registry, professor_id: &str) -> String {
    render_student_table(&registry.report_by_professor(professor_id))
}

pub fn render_student_report(registry: &Registry, email_address: &str) -> String {
    match registry.report_by_student(email_address) {
        Some(student) => render_student_table(std::slice::from_ref(&student)),
        None => STUDENT_NOT_FOUND.to_string(),
    }
}
