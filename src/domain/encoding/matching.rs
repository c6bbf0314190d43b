//! Match Encoder - compares a "preferred X" answer against the "actual X" answer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnalysisError, CategoryCode};
use crate::domain::survey::{FieldValue, Respondent, SchemaField, SurveySchema, Variable};

use super::CodeColumn;

/// Outcome of comparing a preference with reality.
///
/// Match ranks above mismatch so a positive correlation means matching helps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MatchOutcome {
    NotApplicable = 0,
    Mismatch = 1,
    Match = 2,
}

impl MatchOutcome {
    pub fn code(&self) -> CategoryCode {
        CategoryCode::new(*self as u8)
    }
}

/// Encodes one preference/actual pair of fields.
#[derive(Debug, Clone)]
pub struct MatchEncoder<'s> {
    variable: Variable,
    preference: SchemaField,
    actual: SchemaField,
    no_preference_sentinel: &'s str,
}

impl<'s> MatchEncoder<'s> {
    pub fn new(
        variable: Variable,
        preference: SchemaField,
        actual: SchemaField,
        no_preference_sentinel: &'s str,
    ) -> Self {
        Self {
            variable,
            preference,
            actual,
            no_preference_sentinel,
        }
    }

    /// Preferred versus actual company scale.
    pub fn company_scale(schema: &SurveySchema, no_preference_sentinel: &'s str) -> Self {
        Self::new(
            Variable::CompanyMatch,
            schema.field(Variable::CompanyMatch),
            schema.actual_company_scale(),
            no_preference_sentinel,
        )
    }

    /// Preferred versus actual position type.
    pub fn position(schema: &SurveySchema, no_preference_sentinel: &'s str) -> Self {
        Self::new(
            Variable::PositionMatch,
            schema.field(Variable::PositionMatch),
            schema.actual_position(),
            no_preference_sentinel,
        )
    }

    /// Compares a preference with the actual answer.
    ///
    /// The sentinel comparison is exact, so the sentinel must be configured
    /// with the casing the dataset uses.
    pub fn classify(preference: &str, actual: &str, no_preference_sentinel: &str) -> MatchOutcome {
        if preference == no_preference_sentinel {
            MatchOutcome::NotApplicable
        } else if preference == actual {
            MatchOutcome::Match
        } else {
            MatchOutcome::Mismatch
        }
    }

    /// Encodes the preference field in place for every respondent.
    ///
    /// The actual field is only read when a preference was given, so a short
    /// row that declined the question is not a schema error. An actual field
    /// already holding another variable's code means the row is too short for
    /// both positions to be distinct, which is reported as a schema error.
    pub fn encode(&self, respondents: &mut [Respondent]) -> Result<CodeColumn, AnalysisError> {
        let mut column = CodeColumn::with_capacity(self.variable, respondents.len());

        for respondent in respondents.iter_mut() {
            let outcome = {
                let preference = respondent.raw(self.preference)?;
                if preference == self.no_preference_sentinel {
                    MatchOutcome::NotApplicable
                } else {
                    let actual = match respondent.field(self.actual)? {
                        FieldValue::Raw(actual) => actual.as_str(),
                        _ => {
                            return Err(AnalysisError::schema(
                                respondent.row(),
                                self.actual.name,
                                respondent.answer_count(),
                            ))
                        }
                    };
                    Self::classify(preference, actual, self.no_preference_sentinel)
                }
            };

            respondent.set_code(self.preference, outcome.code())?;
            column.codes.push(outcome.code());
        }

        Ok(column)
    }
}
