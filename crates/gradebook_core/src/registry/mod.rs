//! In-memory record store for students, courses, professors and logins.
//!
//! # Responsibility
//! - Own every collection exclusively and hand out clones or immutable
//!   slices, never mutable aliases.
//! - Enforce identifier uniqueness on add for students, courses and
//!   professors.
//! - Keep the student secondary index in lock-step with the student sequence.
//!
//! # Invariants
//! - After any public mutation returns, the student index maps every present
//!   identifier to its exact position and holds nothing else.
//! - Absence is reported as `false`/`None`; only structural violations are
//!   returned as [`RegistryError`].

mod catalog;
mod credentials;
pub(crate) mod index;
mod students;

use crate::model::course::Course;
use crate::model::credential::Credential;
use crate::model::professor::Professor;
use crate::model::student::Student;
use crate::security::cipher::{CredentialCipher, XorCipher};
use index::StudentIndex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Collection a registry error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Student,
    Course,
    Professor,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Course => "course",
            Self::Professor => "professor",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural registry failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Identifier is empty or already present in the target collection.
    DuplicateKey { kind: RecordKind, id: String },
    /// Caller passed a parameter outside the accepted set (e.g. sort key).
    InvalidArgument(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey { kind, id } if id.is_empty() => {
                write!(f, "{kind} identifier cannot be empty")
            }
            Self::DuplicateKey { kind, id } => write!(f, "{kind} `{id}` already exists"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl Error for RegistryError {}

/// Single-owner store behind every gradebook operation.
pub struct Registry {
    pub(crate) students: Vec<Student>,
    pub(crate) index: StudentIndex,
    courses: Vec<Course>,
    professors: Vec<Professor>,
    credentials: Vec<Credential>,
    cipher: Arc<dyn CredentialCipher>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry using the default XOR cipher.
    pub fn new() -> Self {
        Self::with_cipher(Arc::new(XorCipher::default()))
    }

    /// Creates an empty registry with a caller-provided credential cipher.
    pub fn with_cipher(cipher: Arc<dyn CredentialCipher>) -> Self {
        Self {
            students: Vec::new(),
            index: StudentIndex::default(),
            courses: Vec::new(),
            professors: Vec::new(),
            credentials: Vec::new(),
            cipher,
        }
    }

    /// Students in current sequence order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Returns whether all four collections are empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
            && self.courses.is_empty()
            && self.professors.is_empty()
            && self.credentials.is_empty()
    }

    /// Position of a student in the sequence, read through the index.
    pub fn student_position(&self, email_address: &str) -> Option<usize> {
        self.index.get(email_address)
    }

    /// Verifies the secondary index against the student sequence.
    pub fn index_is_consistent(&self) -> bool {
        self.index.is_consistent_with(&self.students)
    }
}

fn require_key(kind: RecordKind, id: &str) -> RegistryResult<()> {
    if id.is_empty() {
        return Err(RegistryError::DuplicateKey {
            kind,
            id: String::new(),
        });
    }
    Ok(())
}
