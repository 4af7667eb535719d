//! Course record.

use serde::{Deserialize, Serialize};

/// Credit count used when none is given.
pub const DEFAULT_COURSE_CREDITS: u32 = 3;

/// One course offering keyed by a short code such as `DATA200`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub course_name: String,
    pub description: String,
    pub credits: u32,
}

impl Course {
    /// Creates a course with the default credit count.
    pub fn new(
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
            description: description.into(),
            credits: DEFAULT_COURSE_CREDITS,
        }
    }

    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    pub fn apply_update(&mut self, update: &CourseUpdate) {
        if let Some(course_name) = &update.course_name {
            self.course_name = course_name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(credits) = update.credits {
            self.credits = credits;
        }
    }
}

/// Field-level update for one course. The course id is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseUpdate {
    pub course_name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<u32>,
}
