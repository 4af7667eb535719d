//! Runtime configuration for gradebook front ends.
//!
//! # Responsibility
//! - Resolve data and log locations plus log level from defaults, the
//!   environment and explicit overrides, in that order of precedence.
//!
//! # Invariants
//! - Resolved `data_dir` and `log_dir` are absolute.
//! - `log_level` is one of the names accepted by `logging::normalize_level`.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Data directory override.
pub const ENV_DATA_DIR: &str = "CMG_DATA_DIR";
/// Log level override (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "GRADEBOOK_LOG_LEVEL";
/// Log directory override.
pub const ENV_LOG_DIR: &str = "GRADEBOOK_LOG_DIR";

const DEFAULT_DATA_DIR_NAME: &str = "data";
const LOG_DIR_NAME: &str = "logs";

/// Configuration resolution failures.
#[derive(Debug)]
pub enum ConfigError {
    EmptyPath(&'static str),
    CurrentDir(std::io::Error),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath(field) => write!(f, "{field} cannot be empty"),
            Self::CurrentDir(err) => write!(f, "cannot resolve current directory: {err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyPath(_) => None,
            Self::CurrentDir(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

/// Unresolved inputs; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub data_dir: Option<String>,
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
}

impl ConfigOverrides {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var(ENV_DATA_DIR).ok(),
            log_level: std::env::var(ENV_LOG_LEVEL).ok(),
            log_dir: std::env::var(ENV_LOG_DIR).ok(),
        }
    }

    /// Fields set in `other` win over fields set in `self`.
    pub fn merged_with(self, other: ConfigOverrides) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            log_level: other.log_level.or(self.log_level),
            log_dir: other.log_dir.or(self.log_dir),
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradebookConfig {
    pub data_dir: PathBuf,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
}

impl GradebookConfig {
    /// Resolves overrides against `base_dir` for relative paths.
    ///
    /// # Errors
    /// - `EmptyPath` when a provided directory is blank.
    /// - `Logging` when the level is not recognized.
    pub fn resolve(overrides: &ConfigOverrides, base_dir: &Path) -> Result<Self, ConfigError> {
        let data_dir = match overrides.data_dir.as_deref() {
            Some(value) => absolutize(non_empty(value, "data_dir")?, base_dir),
            None => base_dir.join(DEFAULT_DATA_DIR_NAME),
        };
        let log_level = match overrides.log_level.as_deref() {
            Some(value) => normalize_level(value)?,
            None => default_log_level(),
        };
        let log_dir = match overrides.log_dir.as_deref() {
            Some(value) => absolutize(non_empty(value, "log_dir")?, base_dir),
            None => data_dir.join(LOG_DIR_NAME),
        };

        Ok(Self {
            data_dir,
            log_level,
            log_dir,
        })
    }

    /// Resolves environment plus `cli` overrides against the current directory.
    pub fn load(cli: ConfigOverrides) -> Result<Self, ConfigError> {
        let base_dir = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        let overrides = ConfigOverrides::from_env().merged_with(cli);
        Self::resolve(&overrides, &base_dir)
    }
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyPath(field));
    }
    Ok(trimmed)
}

fn absolutize(value: &str, base_dir: &Path) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
