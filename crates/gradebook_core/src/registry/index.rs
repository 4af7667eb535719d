//! Secondary index from student identifier to sequence position.
//!
//! # Invariants
//! - After every public registry mutation, `positions[id] == i` exactly when
//!   `students[i].email_address == id`, and no other entries exist.

use crate::model::student::Student;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub(crate) struct StudentIndex {
    positions: HashMap<String, usize>,
}

impl StudentIndex {
    pub(crate) fn get(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Records a student appended at `position`.
    pub(crate) fn insert(&mut self, id: &str, position: usize) {
        self.positions.insert(id.to_string(), position);
    }

    /// Drops `removed_id` and renumbers everything that shifted left.
    ///
    /// `students` is the sequence *after* the removal at `removed_at`.
    pub(crate) fn remove_shifted(
        &mut self,
        students: &[Student],
        removed_id: &str,
        removed_at: usize,
    ) {
        self.positions.remove(removed_id);
        for (offset, student) in students[removed_at..].iter().enumerate() {
            self.positions
                .insert(student.email_address.clone(), removed_at + offset);
        }
    }

    /// Rebuilds every entry from scratch.
    pub(crate) fn rebuild(&mut self, students: &[Student]) {
        self.positions.clear();
        self.positions.reserve(students.len());
        for (position, student) in students.iter().enumerate() {
            self.positions.insert(student.email_address.clone(), position);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
    }

    /// Checks the index against the sequence it should mirror.
    pub(crate) fn is_consistent_with(&self, students: &[Student]) -> bool {
        self.positions.len() == students.len()
            && students
                .iter()
                .enumerate()
                .all(|(position, student)| self.get(&student.email_address) == Some(position))
    }
}
