//! Per-course marks aggregates.

use crate::registry::Registry;
use serde::Serialize;

/// Aggregates over marked students of one course.
///
/// `average` and `median` are `None` exactly when `count == 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseStats {
    pub count: usize,
    pub average: Option<f64>,
    pub median: Option<f64>,
}

impl CourseStats {
    /// Stats for a course without any marked student.
    pub fn empty() -> Self {
        Self {
            count: 0,
            average: None,
            median: None,
        }
    }

    /// Computes stats from raw marks in any order.
    pub fn from_marks(mut marks: Vec<i32>) -> Self {
        if marks.is_empty() {
            return Self::empty();
        }
        marks.sort_unstable();

        let count = marks.len();
        let total: i64 = marks.iter().map(|value| i64::from(*value)).sum();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (f64::from(marks[mid - 1]) + f64::from(marks[mid])) / 2.0
        } else {
            f64::from(marks[mid])
        };

        Self {
            count,
            average: Some(total as f64 / count as f64),
            median: Some(median),
        }
    }
}

impl Registry {
    /// Count, mean and median of marks for students enrolled in `course_id`.
    ///
    /// Students without marks are skipped. An unknown or empty course yields
    /// [`CourseStats::empty`] rather than an error.
    pub fn course_stats(&self, course_id: &str) -> CourseStats {
        let marks = self
            .students()
            .iter()
            .filter(|student| student.course_id == course_id)
            .filter_map(|student| student.marks)
            .collect();
        CourseStats::from_marks(marks)
    }
}
