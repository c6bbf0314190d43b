//! CSV Survey Source Adapter
//!
//! Reads a survey export with one header line followed by one line per
//! respondent. Fields are split on the delimiter without quote handling, so a
//! quote character is kept as part of the answer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::survey::Respondent;
use crate::ports::{LoadError, SurveySource};

/// File-backed survey source.
#[derive(Debug, Clone)]
pub struct CsvSurveySource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSurveySource {
    /// Creates a source reading comma-separated lines from `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<csv::Reader<std::fs::File>, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::not_found(self.path.display().to_string()));
        }

        csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quoting(false)
            .flexible(true)
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| match e.kind() {
                csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound => {
                    LoadError::not_found(self.path.display().to_string())
                }
                _ => LoadError::io(e.to_string()),
            })
    }
}

/// Strips whitespace surrounding the whole line, leaving inner fields untouched.
fn strip_line(mut fields: Vec<String>) -> Vec<String> {
    if let Some(first) = fields.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(last) = fields.last_mut() {
        *last = last.trim_end().to_string();
    }
    fields
}

/// A whitespace-only line. Lines holding delimiters are records, even if every field is empty.
fn is_blank_line(fields: &[String]) -> bool {
    matches!(fields, [only] if only.is_empty())
}

/// Data row number of a record, counting the header as line 1.
fn data_row(position: Option<&csv::Position>) -> Option<usize> {
    position.map(|p| (p.line() as usize).saturating_sub(1))
}

impl SurveySource for CsvSurveySource {
    fn load(&self) -> Result<Vec<Respondent>, LoadError> {
        let mut reader = self.open()?;

        let mut respondents = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| match e.kind() {
                csv::ErrorKind::Io(_) => LoadError::io(e.to_string()),
                _ => {
                    let row = data_row(e.position()).unwrap_or(respondents.len() + 1);
                    LoadError::malformed(row, e.to_string())
                }
            })?;

            let row = data_row(record.position()).unwrap_or(respondents.len() + 1);
            let fields = strip_line(record.iter().map(str::to_string).collect());
            if is_blank_line(&fields) {
                debug!(row, "Skipping blank line");
                continue;
            }
            respondents.push(Respondent::new(row, fields));
        }

        info!(
            path = %self.path.display(),
            respondents = respondents.len(),
            "Survey loaded"
        );
        Ok(respondents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
