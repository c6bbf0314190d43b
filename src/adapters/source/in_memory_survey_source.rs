//! In-memory survey source for tests and embedding.

use crate::domain::survey::Respondent;
use crate::ports::{LoadError, SurveySource};

/// Serves a fixed set of rows, as if read from a file after its header.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurveySource {
    rows: Vec<Vec<String>>,
}

impl InMemorySurveySource {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Splits each line on commas, like the CSV source does.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().split(',').map(str::to_string).collect())
            .collect();
        Self { rows }
    }
}

impl SurveySource for InMemorySurveySource {
    fn load(&self) -> Result<Vec<Respondent>, LoadError> {
        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(i, fields)| Respondent::new(i + 1, fields.clone()))
            .collect())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.rows.len())
    }
}
