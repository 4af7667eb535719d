//! CSV-backed store for the four registry collections.

use super::rows::{
    CourseRow, CredentialRow, ProfessorRow, StudentRow, COURSE_HEADERS, CREDENTIAL_HEADERS,
    PROFESSOR_HEADERS, STUDENT_HEADERS,
};
use super::{PersistError, PersistResult};
use crate::model::student::Student;
use crate::registry::Registry;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const STUDENTS_FILE_NAME: &str = "students.csv";
pub const COURSES_FILE_NAME: &str = "courses.csv";
pub const PROFESSORS_FILE_NAME: &str = "professors.csv";
pub const CREDENTIALS_FILE_NAME: &str = "login.csv";

/// Reads and writes registry collections under one data directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(STUDENTS_FILE_NAME)
    }

    pub fn courses_path(&self) -> PathBuf {
        self.data_dir.join(COURSES_FILE_NAME)
    }

    pub fn professors_path(&self) -> PathBuf {
        self.data_dir.join(PROFESSORS_FILE_NAME)
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.data_dir.join(CREDENTIALS_FILE_NAME)
    }

    /// Loads courses, professors, students and credentials, in that order.
    ///
    /// Stops at the first failing collection; earlier ones stay loaded.
    pub fn load_all(&self, registry: &mut Registry) -> PersistResult<()> {
        let started_at = Instant::now();
        let result = self
            .load_courses(registry)
            .and_then(|_| self.load_professors(registry))
            .and_then(|_| self.load_students(registry))
            .and_then(|_| self.load_credentials(registry))
            .map(|_| ());
        log_outcome("store_load", &self.data_dir, started_at, &result);
        result
    }

    /// Saves every collection, each to its own file.
    pub fn save_all(&self, registry: &Registry) -> PersistResult<()> {
        let started_at = Instant::now();
        let result = self
            .save_students(registry)
            .and_then(|_| self.save_courses(registry))
            .and_then(|_| self.save_professors(registry))
            .and_then(|_| self.save_credentials(registry))
            .map(|_| ());
        log_outcome("store_save", &self.data_dir, started_at, &result);
        result
    }

    /// Replaces the student collection with the file contents.
    ///
    /// Rows go through `Registry::add_student`, so blank grades are derived
    /// and duplicate or empty emails fail the load.
    pub fn load_students(&self, registry: &mut Registry) -> PersistResult<usize> {
        let path = self.students_path();
        registry.clear_students();
        let rows: Vec<StudentRow> = read_rows(&path)?;
        let count = rows.len();
        for row in rows {
            registry
                .add_student(Student::from(row))
                .map_err(|source| PersistError::Registry {
                    path: path.clone(),
                    source,
                })?;
        }
        debug!("event=collection_load module=persist status=ok collection=students rows={count}");
        Ok(count)
    }

    pub fn save_students(&self, registry: &Registry) -> PersistResult<usize> {
        let count = write_rows(
            &self.students_path(),
            &STUDENT_HEADERS,
            registry.students().iter().map(StudentRow::from),
        )?;
        debug!("event=collection_save module=persist status=ok collection=students rows={count}");
        Ok(count)
    }

    pub fn load_courses(&self, registry: &mut Registry) -> PersistResult<usize> {
        let path = self.courses_path();
        registry.clear_courses();
        let rows: Vec<CourseRow> = read_rows(&path)?;
        let count = rows.len();
        for row in rows {
            registry
                .add_course(row.into())
                .map_err(|source| PersistError::Registry {
                    path: path.clone(),
                    source,
                })?;
        }
        debug!("event=collection_load module=persist status=ok collection=courses rows={count}");
        Ok(count)
    }

    pub fn save_courses(&self, registry: &Registry) -> PersistResult<usize> {
        write_rows(
            &self.courses_path(),
            &COURSE_HEADERS,
            registry.courses().iter().map(CourseRow::from),
        )
    }

    pub fn load_professors(&self, registry: &mut Registry) -> PersistResult<usize> {
        let path = self.professors_path();
        registry.clear_professors();
        let rows: Vec<ProfessorRow> = read_rows(&path)?;
        let count = rows.len();
        for row in rows {
            registry
                .add_professor(row.into())
                .map_err(|source| PersistError::Registry {
                    path: path.clone(),
                    source,
                })?;
        }
        debug!(
            "event=collection_load module=persist status=ok collection=professors rows={count}"
        );
        Ok(count)
    }

    pub fn save_professors(&self, registry: &Registry) -> PersistResult<usize> {
        write_rows(
            &self.professors_path(),
            &PROFESSOR_HEADERS,
            registry.professors().iter().map(ProfessorRow::from),
        )
    }

    /// Credentials are restored as stored tokens; nothing is re-obfuscated.
    pub fn load_credentials(&self, registry: &mut Registry) -> PersistResult<usize> {
        let path = self.credentials_path();
        registry.clear_credentials();
        let rows: Vec<CredentialRow> = read_rows(&path)?;
        let count = rows.len();
        for row in rows {
            registry.insert_credential(row.into());
        }
        debug!(
            "event=collection_load module=persist status=ok collection=credentials rows={count}"
        );
        Ok(count)
    }

    pub fn save_credentials(&self, registry: &Registry) -> PersistResult<usize> {
        write_rows(
            &self.credentials_path(),
            &CREDENTIAL_HEADERS,
            registry.credentials().iter().map(CredentialRow::from),
        )
    }
}

/// Reads every row of `path`. A missing file reads as zero rows.
///
/// Header names are trimmed; field values are kept as written so a saved
/// collection loads back unchanged.
fn read_rows<R: DeserializeOwned>(path: &Path) -> PersistResult<Vec<R>> {
    if !path.exists() {
        debug!(
            "event=collection_load module=persist status=missing path={}",
            path.display()
        );
        return Ok(Vec::new());
    }

    let csv_error = |source| PersistError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    reader
        .deserialize()
        .collect::<Result<Vec<R>, csv::Error>>()
        .map_err(csv_error)
}

/// Writes header + rows to a sibling temp file, then renames it over `path`.
fn write_rows<R, I>(path: &Path, headers: &[&str], rows: I) -> PersistResult<usize>
where
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let io_error = |path: &Path, source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
    }

    let temp_path = path.with_extension("csv.tmp");
    let csv_error = |source| PersistError::Csv {
        path: temp_path.clone(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(&temp_path)
        .map_err(csv_error)?;
    writer.write_record(headers).map_err(csv_error)?;

    let mut count = 0usize;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
        count += 1;
    }
    writer
        .flush()
        .map_err(|source| io_error(&temp_path, source))?;
    drop(writer);

    fs::rename(&temp_path, path).map_err(|source| io_error(path, source))?;
    Ok(count)
}

fn log_outcome(event: &str, data_dir: &Path, started_at: Instant, result: &PersistResult<()>) {
    match result {
        Ok(()) => info!(
            "event={event} module=persist status=ok data_dir={} duration_ms={}",
            data_dir.display(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={event} module=persist status=error data_dir={} duration_ms={} error={err}",
            data_dir.display(),
            started_at.elapsed().as_millis()
        ),
    }
}
