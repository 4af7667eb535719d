//! Student record and its typed field update.
//!
//! # Responsibility
//! - Define the student value record keyed by email address.
//! - Keep the grade consistent with marks when either is filled in.
//!
//! # Invariants
//! - `email_address` is the primary key and is never changed by an update.
//! - A blank grade with known marks is always derived via [`classify`].
//! - Updating marks always re-derives the grade, overriding any grade supplied
//!   in the same update.

use crate::model::grade::{classify, grade_for};
use serde::{Deserialize, Serialize};

/// Student identifier (email address).
pub type StudentId = String;

/// One enrolled student with a single course and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key; unique across the registry.
    pub email_address: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Soft reference to `Course::course_id`; not validated.
    pub course_id: String,
    /// Letter grade string. Blank means "not graded yet".
    pub grade: String,
    /// Raw score, nominally 0..=100. `None` means no score recorded.
    pub marks: Option<i32>,
}

impl Student {
    /// Creates a student with marks and a blank grade.
    ///
    /// The grade is derived when the record is added to a registry.
    pub fn new(
        email_address: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_id: impl Into<String>,
        marks: Option<i32>,
    ) -> Self {
        Self {
            email_address: email_address.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            course_id: course_id.into(),
            grade: String::new(),
            marks,
        }
    }

    /// Returns this record with an explicit grade.
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    /// Returns whether the grade still has to be derived from marks.
    pub fn has_blank_grade(&self) -> bool {
        self.grade.trim().is_empty()
    }

    /// Fills a blank grade from marks. Leaves explicit grades untouched.
    pub fn derive_blank_grade(&mut self) {
        if self.has_blank_grade() && self.marks.is_some() {
            self.grade = grade_for(self.marks);
        }
    }

    /// Applies every present field of `update`.
    ///
    /// Marks win over grade: when both are supplied, the grade is re-derived.
    pub fn apply_update(&mut self, update: &StudentUpdate) {
        if let Some(first_name) = &update.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(course_id) = &update.course_id {
            self.course_id = course_id.clone();
        }
        if let Some(grade) = &update.grade {
            self.grade = grade.clone();
        }
        if let Some(marks) = update.marks {
            self.marks = Some(marks);
            self.grade = classify(marks).as_str().to_string();
        }
    }
}

/// Field-level update for one student. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub course_id: Option<String>,
    pub grade: Option<String>,
    pub marks: Option<i32>,
}

impl StudentUpdate {
    /// Update that only changes marks (and therefore the grade).
    pub fn marks(marks: i32) -> Self {
        Self {
            marks: Some(marks),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Student, StudentUpdate};

    #[test]
    fn derive_blank_grade_keeps_explicit_grade() {
        let mut student = Student::new("sam@mycsu.edu", "Sam", "Carpenter", "DATA200", Some(50))
            .with_grade("A");
        student.derive_blank_grade();
        assert_eq!(student.grade, "A");
    }

    #[test]
    fn derive_blank_grade_without_marks_stays_blank() {
        let mut student = Student::new("nomarks@mycsu.edu", "No", "Marks", "DATA200", None);
        student.derive_blank_grade();
        assert_eq!(student.grade, "");
    }

    #[test]
    fn marks_update_overrides_supplied_grade() {
        let mut student = Student::new("jane@mycsu.edu", "Jane", "Lopez", "DATA200", Some(88));
        student.apply_update(&StudentUpdate {
            grade: Some("F".to_string()),
            marks: Some(91),
            ..StudentUpdate::default()
        });
        assert_eq!(student.marks, Some(91));
        assert_eq!(student.grade, "A-");
    }

    #[test]
    fn grade_only_update_is_kept_verbatim() {
        let mut student = Student::new("bob@mycsu.edu", "Bob", "Nguyen", "MATH101", Some(73));
        student.apply_update(&StudentUpdate {
            grade: Some("Incomplete".to_string()),
            ..StudentUpdate::default()
        });
        assert_eq!(student.grade, "Incomplete");
        assert_eq!(student.marks, Some(73));
    }
}
