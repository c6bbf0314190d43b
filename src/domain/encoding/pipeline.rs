//! Encoding pipeline - scores respondents, then encodes every analysed variable.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::foundation::{AnalysisError, CategoryCode, SatisfactionScore};
use crate::domain::survey::{Respondent, SurveySchema, Variable};

use super::{
    CategoricalEncoder, CodeColumn, DegreeEncoder, MatchEncoder, SatisfactionScorer, AGE_TABLE,
    ENTRY_LEVEL_TABLE, GENDER_TABLE, SALARY_TABLE,
};

/// Code given to an age bracket missing from the age table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeFallback {
    /// Unknown bracket is coded 0.
    #[default]
    Unknown,
    /// Unknown bracket is folded into the oldest bracket, code 4.
    OldestBracket,
}

impl AgeFallback {
    pub fn code(&self) -> CategoryCode {
        match self {
            AgeFallback::Unknown => CategoryCode::UNKNOWN,
            AgeFallback::OldestBracket => CategoryCode::new(4),
        }
    }
}

/// Dataset-specific encoding choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingSettings {
    pub schema: SurveySchema,
    pub age_fallback: AgeFallback,
    /// Answer meaning "no preference provided" in the preference fields.
    pub no_preference_sentinel: String,
}

impl Default for EncodingSettings {
    fn default() -> Self {
        Self {
            schema: SurveySchema::default(),
            age_fallback: AgeFallback::default(),
            no_preference_sentinel: "other".to_string(),
        }
    }
}

/// Output of one encoding run.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedSurvey {
    /// Satisfaction scores in respondent order.
    pub satisfaction: Vec<SatisfactionScore>,
    /// One column per variable, in [`Variable::ALL`] order.
    pub columns: Vec<CodeColumn>,
}

impl EncodedSurvey {
    /// Returns the column for a variable.
    pub fn column(&self, variable: Variable) -> Option<&CodeColumn> {
        self.columns.iter().find(|c| c.variable == variable)
    }

    /// Mean satisfaction over all respondents, if there are any.
    pub fn overall_satisfaction(&self) -> Option<f64> {
        if self.satisfaction.is_empty() {
            return None;
        }
        let total: f64 = self.satisfaction.iter().map(SatisfactionScore::value).sum();
        Some(total / self.satisfaction.len() as f64)
    }
}

/// Runs the scorer and every encoder over a respondent set, in place.
#[derive(Debug, Clone, Default)]
pub struct EncodingPipeline {
    settings: EncodingSettings,
}

impl EncodingPipeline {
    pub fn new(settings: EncodingSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EncodingSettings {
        &self.settings
    }

    /// Scores, then encodes age, gender, degree, entry level, salary,
    /// company-scale match and position match, in that order.
    ///
    /// # Errors
    ///
    /// The first `AnalysisError` raised by any stage; respondents may be
    /// partially encoded afterwards and must be discarded.
    pub fn run(&self, respondents: &mut [Respondent]) -> Result<EncodedSurvey, AnalysisError> {
        let schema = &self.settings.schema;
        let sentinel = self.settings.no_preference_sentinel.as_str();

        let satisfaction = SatisfactionScorer::score(respondents)?;
        debug!(respondents = satisfaction.len(), "Satisfaction scored");

        let mut columns = Vec::with_capacity(Variable::ALL.len());
        for variable in Variable::ALL {
            let column = match variable {
                Variable::Age => CategoricalEncoder::new(
                    variable,
                    schema.field(variable),
                    &AGE_TABLE,
                    self.settings.age_fallback.code(),
                )
                .encode(respondents)?,
                Variable::Gender => CategoricalEncoder::new(
                    variable,
                    schema.field(variable),
                    &GENDER_TABLE,
                    CategoryCode::UNKNOWN,
                )
                .encode(respondents)?,
                Variable::Degree => DegreeEncoder::new(schema.field(variable)).encode(respondents)?,
                Variable::EntryLevel => CategoricalEncoder::new(
                    variable,
                    schema.field(variable),
                    &ENTRY_LEVEL_TABLE,
                    CategoryCode::UNKNOWN,
                )
                .encode(respondents)?,
                Variable::Salary => CategoricalEncoder::new(
                    variable,
                    schema.field(variable),
                    &SALARY_TABLE,
                    CategoryCode::UNKNOWN,
                )
                .encode(respondents)?,
                Variable::CompanyMatch => {
                    MatchEncoder::company_scale(schema, sentinel).encode(respondents)?
                }
                Variable::PositionMatch => {
                    MatchEncoder::position(schema, sentinel).encode(respondents)?
                }
            };

            if column.defaults_applied > 0 {
                info!(
                    variable = %variable,
                    defaults_applied = column.defaults_applied,
                    "Default codes applied to unmapped answers"
                );
            }
            columns.push(column);
        }

        Ok(EncodedSurvey {
            satisfaction,
            columns,
        })
    }
}
