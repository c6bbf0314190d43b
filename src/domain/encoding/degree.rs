//! Degree Encoder - classifies free-text program names by their leading letter.
//!
//! Double encoding: degree name -> degree level -> code, e.g.
//! "Bachelor's Degree in Arts" -> Bachelor's -> 2.

use tracing::debug;

use crate::domain::foundation::{AnalysisError, CategoryCode};
use crate::domain::survey::{Respondent, SchemaField, Variable};

use super::CodeColumn;

/// Encodes the degree field.
#[derive(Debug, Clone, Copy)]
pub struct DegreeEncoder {
    field: SchemaField,
}

impl DegreeEncoder {
    pub fn new(field: SchemaField) -> Self {
        Self { field }
    }

    /// Classifies a degree name by its first character, case-insensitively.
    ///
    /// Returns `None` for an empty name or an unrecognised leading letter.
    pub fn classify(degree_name: &str) -> Option<CategoryCode> {
        let level = match degree_name.chars().next()?.to_ascii_uppercase() {
            'A' => 1, // Associate's
            'B' => 2, // Bachelor's
            'M' => 3, // Master's
            'P' => 4, // PhD
            'D' => 0, // Diploma, certificate or other 2-year program
            _ => return None,
        };
        Some(CategoryCode::new(level))
    }

    /// Returns the code for a degree name, with unclassified names mapped to 0.
    pub fn encode_value(degree_name: &str) -> CategoryCode {
        Self::classify(degree_name).unwrap_or(CategoryCode::UNKNOWN)
    }

    /// Encodes the degree field in place for every respondent.
    pub fn encode(&self, respondents: &mut [Respondent]) -> Result<CodeColumn, AnalysisError> {
        let mut column = CodeColumn::with_capacity(Variable::Degree, respondents.len());

        for respondent in respondents.iter_mut() {
            let code = {
                let degree_name = respondent.raw(self.field)?;
                match Self::classify(degree_name) {
                    Some(code) => code,
                    None => {
                        debug!(
                            row = respondent.row(),
                            degree_name,
                            "Unclassified degree, coded as 0"
                        );
                        column.defaults_applied += 1;
                        CategoryCode::UNKNOWN
                    }
                }
            };

            respondent.set_code(self.field, code)?;
            column.codes.push(code);
        }

        Ok(column)
    }
}
