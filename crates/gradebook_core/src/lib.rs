//! Core domain logic for the gradebook.
//! This crate is the single source of truth for registry invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod persist;
pub mod registry;
pub mod report;
pub mod search;
pub mod security;

pub use config::{ConfigError, ConfigOverrides, GradebookConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::course::{Course, CourseUpdate, DEFAULT_COURSE_CREDITS};
pub use model::credential::{Credential, DEFAULT_ROLE};
pub use model::grade::{classify, grade_for, LetterGrade};
pub use model::professor::{Professor, ProfessorUpdate};
pub use model::student::{Student, StudentId, StudentUpdate};
pub use persist::{CsvStore, PersistError, PersistResult};
pub use registry::{RecordKind, Registry, RegistryError, RegistryResult};
pub use report::render::{
    render_course_report, render_professor_report, render_student_report, render_student_table,
};
pub use report::stats::CourseStats;
pub use search::lookup::{SearchOutcome, SearchStrategy};
pub use search::sort::SortKey;
pub use security::cipher::{CipherError, CredentialCipher, XorCipher};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
