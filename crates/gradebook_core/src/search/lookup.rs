//! Timed student lookups.

use crate::model::student::Student;
use crate::registry::Registry;
use std::time::{Duration, Instant};

/// Lookup result paired with the time the lookup took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub student: Option<Student>,
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.student.is_some()
    }
}

/// Which lookup path produced a [`SearchOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Linear,
    Indexed,
}

impl SearchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Indexed => "indexed",
        }
    }
}

impl Registry {
    /// Scans the sequence in order and returns the first matching student.
    pub fn search_student_linear(&self, email_address: &str) -> SearchOutcome {
        let started_at = Instant::now();
        let found = self
            .students
            .iter()
            .find(|student| student.email_address == email_address);
        let elapsed = started_at.elapsed();
        SearchOutcome {
            student: found.cloned(),
            elapsed,
        }
    }

    /// One index lookup followed by one positional access.
    pub fn search_student_indexed(&self, email_address: &str) -> SearchOutcome {
        let started_at = Instant::now();
        let found = self
            .index
            .get(email_address)
            .and_then(|position| self.students.get(position));
        let elapsed = started_at.elapsed();
        SearchOutcome {
            student: found.cloned(),
            elapsed,
        }
    }

    /// Dispatches to the lookup named by `strategy`.
    pub fn search_student(&self, email_address: &str, strategy: SearchStrategy) -> SearchOutcome {
        match strategy {
            SearchStrategy::Linear => self.search_student_linear(email_address),
            SearchStrategy::Indexed => self.search_student_indexed(email_address),
        }
    }
}
