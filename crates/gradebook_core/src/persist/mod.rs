//! Flat-file persistence for registry collections.
//!
//! # Responsibility
//! - Load and save each collection as one CSV file with a header row.
//! - Keep file layout details out of the registry.
//!
//! # Invariants
//! - Load clears the target collection first; a missing file leaves it empty.
//! - Save replaces the whole file, header first, via a temp file + rename.
//! - Collections are saved independently; there is no cross-file atomicity.

mod csv_store;
mod rows;

pub use csv_store::{
    CsvStore, COURSES_FILE_NAME, CREDENTIALS_FILE_NAME, PROFESSORS_FILE_NAME, STUDENTS_FILE_NAME,
};

use crate::registry::RegistryError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence adapter failures.
#[derive(Debug)]
pub enum PersistError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    /// A loaded row violated a registry invariant (e.g. duplicate id).
    Registry {
        path: PathBuf,
        source: RegistryError,
    },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error on `{}`: {source}", path.display()),
            Self::Csv { path, source } => {
                write!(f, "csv error on `{}`: {source}", path.display())
            }
            Self::Registry { path, source } => {
                write!(f, "invalid record in `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Registry { source, .. } => Some(source),
        }
    }
}
