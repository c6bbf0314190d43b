//! Analysis report - the published outcome of one pipeline run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::domain::survey::Variable;

use super::{AggregationMap, CorrelationSummary, LinearFit};

/// Results for one analysed variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableReport {
    pub variable: Variable,
    pub title: &'static str,
    pub means: AggregationMap,
    pub correlation: CorrelationSummary,
    pub regression: Option<LinearFit>,
    /// Respondents whose answer fell back to the default code.
    pub defaults_applied: usize,
    pub chart: Option<PathBuf>,
}

/// Results for a whole survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub respondents: usize,
    pub overall_satisfaction: Option<f64>,
    pub generated_at: DateTime<Utc>,
    pub variables: Vec<VariableReport>,
}

impl AnalysisReport {
    pub fn new(source: impl Into<String>, respondents: usize) -> Self {
        Self {
            source: source.into(),
            respondents,
            overall_satisfaction: None,
            generated_at: Utc::now(),
            variables: Vec::with_capacity(Variable::ALL.len()),
        }
    }

    pub fn variable(&self, variable: Variable) -> Option<&VariableReport> {
        self.variables.iter().find(|v| v.variable == variable)
    }
}
