//! Domain records kept by the gradebook registry.
//!
//! # Responsibility
//! - Define the plain value records for students, courses, professors and
//!   login credentials.
//! - Own the marks-to-letter-grade classification table.
//!
//! # Invariants
//! - Every record is keyed by a string identifier that is unique within its
//!   collection (enforced by the registry, not by the records).
//! - Cross-record references (`course_id`) are soft and never validated.

pub mod course;
pub mod credential;
pub mod grade;
pub mod professor;
pub mod student;
