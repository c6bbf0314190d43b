//! Survey Source Port - where respondent records come from.

use thiserror::Error;

use crate::domain::survey::Respondent;

/// Errors that can occur while loading respondent records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Survey file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read survey: {message}")]
    Io { message: String },

    #[error("Row {row} could not be read: {reason}")]
    Malformed { row: usize, reason: String },
}

impl LoadError {
    pub fn not_found(path: impl Into<String>) -> Self {
        LoadError::NotFound { path: path.into() }
    }

    pub fn io(message: impl Into<String>) -> Self {
        LoadError::Io {
            message: message.into(),
        }
    }

    pub fn malformed(row: usize, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            row,
            reason: reason.into(),
        }
    }
}

/// Port for reading raw respondent records.
///
/// # Contract
///
/// Implementations must:
/// - Discard the header line
/// - Return records in file order, numbering data rows from 1
/// - Keep every field as raw text, unquoted and untrimmed
pub trait SurveySource: Send + Sync {
    /// Loads every respondent.
    ///
    /// # Errors
    ///
    /// - `LoadError::NotFound` if the source does not exist
    /// - `LoadError::Io` if it cannot be read
    /// - `LoadError::Malformed` if a row cannot be decoded
    fn load(&self) -> Result<Vec<Respondent>, LoadError>;

    /// Human-readable description of the source, used in reports.
    fn describe(&self) -> String;
}
