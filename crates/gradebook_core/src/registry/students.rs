//! Student CRUD with index maintenance.

use super::{require_key, RecordKind, Registry, RegistryError, RegistryResult};
use crate::model::student::{Student, StudentUpdate};
use log::{debug, info};

impl Registry {
    /// Adds one student.
    ///
    /// # Errors
    /// - `DuplicateKey` when the email is empty or already registered.
    ///
    /// # Side effects
    /// - Derives a blank grade from marks.
    /// - Appends to the sequence and indexes the new position.
    pub fn add_student(&mut self, mut student: Student) -> RegistryResult<()> {
        require_key(RecordKind::Student, &student.email_address)?;
        if self.index.contains(&student.email_address) {
            debug!("event=student_add module=registry status=duplicate");
            return Err(RegistryError::DuplicateKey {
                kind: RecordKind::Student,
                id: student.email_address,
            });
        }

        student.derive_blank_grade();
        let position = self.students.len();
        self.index.insert(&student.email_address, position);
        self.students.push(student);
        debug!(
            "event=student_add module=registry status=ok position={} total={}",
            position,
            self.students.len()
        );
        Ok(())
    }

    /// Removes one student. Returns `false` when the email is unknown.
    pub fn delete_student(&mut self, email_address: &str) -> bool {
        let Some(position) = self.index.get(email_address) else {
            debug!("event=student_delete module=registry status=not_found");
            return false;
        };

        let removed = self.students.remove(position);
        self.index
            .remove_shifted(&self.students, &removed.email_address, position);
        info!(
            "event=student_delete module=registry status=ok position={} total={}",
            position,
            self.students.len()
        );
        true
    }

    /// Applies a typed field update. Returns `false` when the email is unknown.
    ///
    /// Identifiers are not updatable, so positions and the index are unchanged.
    pub fn update_student(&mut self, email_address: &str, update: &StudentUpdate) -> bool {
        let Some(position) = self.index.get(email_address) else {
            debug!("event=student_update module=registry status=not_found");
            return false;
        };

        self.students[position].apply_update(update);
        debug!(
            "event=student_update module=registry status=ok position={} marks_changed={}",
            position,
            update.marks.is_some()
        );
        true
    }

    /// Returns a copy of one student via the index.
    pub fn get_student(&self, email_address: &str) -> Option<Student> {
        self.index
            .get(email_address)
            .map(|position| self.students[position].clone())
    }

    /// Removes every student and clears the index.
    pub fn clear_students(&mut self) {
        self.students.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::model::student::{Student, StudentUpdate};
    use crate::registry::{RecordKind, Registry, RegistryError};

    #[test]
    fn add_rejects_empty_email() {
        let mut registry = Registry::new();
        let err = registry
            .add_student(Student::new("", "No", "Email", "C1", Some(50)))
            .expect_err("empty email must be rejected");
        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                kind: RecordKind::Student,
                id: String::new(),
            }
        );
        assert!(err.to_string().contains("cannot be empty"));
        assert_eq!(registry.student_count(), 0);
    }

    #[test]
    fn update_of_unknown_student_changes_nothing() {
        let mut registry = Registry::new();
        registry
            .add_student(Student::new("a@x.edu", "A", "B", "C1", Some(60)))
            .unwrap();
        assert!(!registry.update_student("z@x.edu", &StudentUpdate::marks(99)));
        assert_eq!(registry.students()[0].grade, "D");
    }

    #[test]
    fn clear_students_empties_index() {
        let mut registry = Registry::new();
        registry
            .add_student(Student::new("a@x.edu", "A", "B", "C1", Some(60)))
            .unwrap();
        registry.clear_students();
        assert_eq!(registry.student_position("a@x.edu"), None);
        assert!(registry.index_is_consistent());
    }
}
