//! Course and professor CRUD.
//!
//! Both collections are small, so lookups are linear scans and the first
//! match wins.

use super::{require_key, RecordKind, Registry, RegistryError, RegistryResult};
use crate::model::course::{Course, CourseUpdate};
use crate::model::professor::{Professor, ProfessorUpdate};
use log::debug;

impl Registry {
    /// Adds one course.
    ///
    /// # Errors
    /// - `DuplicateKey` when the course id is empty or already present.
    pub fn add_course(&mut self, course: Course) -> RegistryResult<()> {
        require_key(RecordKind::Course, &course.course_id)?;
        if self.courses.iter().any(|c| c.course_id == course.course_id) {
            return Err(RegistryError::DuplicateKey {
                kind: RecordKind::Course,
                id: course.course_id,
            });
        }
        debug!(
            "event=course_add module=registry status=ok course_id={}",
            course.course_id
        );
        self.courses.push(course);
        Ok(())
    }

    pub fn delete_course(&mut self, course_id: &str) -> bool {
        match self.courses.iter().position(|c| c.course_id == course_id) {
            Some(position) => {
                self.courses.remove(position);
                debug!("event=course_delete module=registry status=ok course_id={course_id}");
                true
            }
            None => false,
        }
    }

    pub fn update_course(&mut self, course_id: &str, update: &CourseUpdate) -> bool {
        match self.courses.iter_mut().find(|c| c.course_id == course_id) {
            Some(course) => {
                course.apply_update(update);
                true
            }
            None => false,
        }
    }

    pub fn get_course(&self, course_id: &str) -> Option<Course> {
        self.courses
            .iter()
            .find(|c| c.course_id == course_id)
            .cloned()
    }

    pub fn clear_courses(&mut self) {
        self.courses.clear();
    }

    /// Adds one professor.
    ///
    /// # Errors
    /// - `DuplicateKey` when the professor id is empty or already present.
    pub fn add_professor(&mut self, professor: Professor) -> RegistryResult<()> {
        require_key(RecordKind::Professor, &professor.professor_id)?;
        if self
            .professors
            .iter()
            .any(|p| p.professor_id == professor.professor_id)
        {
            return Err(RegistryError::DuplicateKey {
                kind: RecordKind::Professor,
                id: professor.professor_id,
            });
        }
        debug!(
            "event=professor_add module=registry status=ok course_id={}",
            professor.course_id
        );
        self.professors.push(professor);
        Ok(())
    }

    pub fn delete_professor(&mut self, professor_id: &str) -> bool {
        match self
            .professors
            .iter()
            .position(|p| p.professor_id == professor_id)
        {
            Some(position) => {
                self.professors.remove(position);
                debug!("event=professor_delete module=registry status=ok");
                true
            }
            None => false,
        }
    }

    pub fn update_professor(&mut self, professor_id: &str, update: &ProfessorUpdate) -> bool {
        match self
            .professors
            .iter_mut()
            .find(|p| p.professor_id == professor_id)
        {
            Some(professor) => {
                professor.apply_update(update);
                true
            }
            None => false,
        }
    }

    pub fn get_professor(&self, professor_id: &str) -> Option<Professor> {
        self.professors
            .iter()
            .find(|p| p.professor_id == professor_id)
            .cloned()
    }

    pub fn clear_professors(&mut self) {
        self.professors.clear();
    }
}
