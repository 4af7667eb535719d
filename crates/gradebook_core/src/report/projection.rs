//! Cross-referenced student views.

use crate::model::student::Student;
use crate::registry::Registry;
use std::collections::BTreeSet;

impl Registry {
    /// All students enrolled in `course_id`, in sequence order.
    pub fn report_by_course(&self, course_id: &str) -> Vec<Student> {
        self.students()
            .iter()
            .filter(|student| student.course_id == course_id)
            .cloned()
            .collect()
    }

    /// Students in any course taught by a professor record with this id.
    ///
    /// Every matching professor record contributes its course.
    pub fn report_by_professor(&self, professor_id: &str) -> Vec<Student> {
        let taught: BTreeSet<&str> = self
            .professors()
            .iter()
            .filter(|professor| professor.professor_id == professor_id)
            .map(|professor| professor.course_id.as_str())
            .collect();
        if taught.is_empty() {
            return Vec::new();
        }

        self.students()
            .iter()
            .filter(|student| taught.contains(student.course_id.as_str()))
            .cloned()
            .collect()
    }

    /// One student via the indexed lookup.
    pub fn report_by_student(&self, email_address: &str) -> Option<Student> {
        self.search_student_indexed(email_address).student
    }
}
