//! Professor record.
//!
//! One record carries exactly one taught course; a professor teaching several
//! courses needs one record per course under distinct identifiers.

use serde::{Deserialize, Serialize};

/// One professor keyed by email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub professor_id: String,
    pub professor_name: String,
    /// Free-form title, e.g. `Senior Professor`.
    pub rank: String,
    /// Soft reference to `Course::course_id`.
    pub course_id: String,
}

impl Professor {
    pub fn new(
        professor_id: impl Into<String>,
        professor_name: impl Into<String>,
        rank: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Self {
        Self {
            professor_id: professor_id.into(),
            professor_name: professor_name.into(),
            rank: rank.into(),
            course_id: course_id.into(),
        }
    }

    pub fn apply_update(&mut self, update: &ProfessorUpdate) {
        if let Some(professor_name) = &update.professor_name {
            self.professor_name = professor_name.clone();
        }
        if let Some(rank) = &update.rank {
            self.rank = rank.clone();
        }
        if let Some(course_id) = &update.course_id {
            self.course_id = course_id.clone();
        }
    }
}

/// Field-level update for one professor. The professor id is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessorUpdate {
    pub professor_name: Option<String>,
    pub rank: Option<String>,
    pub course_id: Option<String>,
}
