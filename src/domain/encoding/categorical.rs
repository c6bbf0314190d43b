//! Categorical Encoder - table lookup with a default for unmapped answers.

use tracing::debug;

use crate::domain::foundation::{AnalysisError, CategoryCode};
use crate::domain::survey::{Respondent, SchemaField, Variable};

use super::{CodeColumn, LookupTable};

/// Rewrites one field of every respondent to its lookup-table code.
#[derive(Debug, Clone, Copy)]
pub struct CategoricalEncoder<'t> {
    variable: Variable,
    field: SchemaField,
    table: &'t LookupTable,
    default: CategoryCode,
}

impl<'t> CategoricalEncoder<'t> {
    pub fn new(
        variable: Variable,
        field: SchemaField,
        table: &'t LookupTable,
        default: CategoryCode,
    ) -> Self {
        Self {
            variable,
            field,
            table,
            default,
        }
    }

    /// Returns the table code for `answer`, or the default if it is unmapped.
    pub fn encode_value(&self, answer: &str) -> CategoryCode {
        self.table.get(answer).unwrap_or(self.default)
    }

    /// Encodes the field in place for every respondent.
    ///
    /// Unmapped answers receive the default code; this is logged and counted,
    /// never raised.
    ///
    /// # Errors
    ///
    /// `AnalysisError::Schema` for a row too short to hold the field, and
    /// `AnalysisError::FieldState` if the field was already encoded.
    pub fn encode(&self, respondents: &mut [Respondent]) -> Result<CodeColumn, AnalysisError> {
        let mut column = CodeColumn::with_capacity(self.variable, respondents.len());

        for respondent in respondents.iter_mut() {
            let code = {
                let answer = respondent.raw(self.field)?;
                match self.table.get(answer) {
                    Some(code) => code,
                    None => {
                        debug!(
                            row = respondent.row(),
                            variable = %self.variable,
                            answer,
                            default = %self.default,
                            "Unmapped answer, default code applied"
                        );
                        column.defaults_applied += 1;
                        self.default
                    }
                }
            };

            respondent.set_code(self.field, code)?;
            column.codes.push(code);
        }

        Ok(column)
    }
}
