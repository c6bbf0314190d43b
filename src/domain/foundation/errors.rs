//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::CategoryCode;

/// One of the two passes the aggregator makes over the respondent set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationPass {
    /// Summing satisfaction per code read from the respondent records.
    ScoreTotals,
    /// Counting members per code from the encoder's output sequence.
    MemberCounts,
}

impl fmt::Display for AggregationPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AggregationPass::ScoreTotals => "score totals",
            AggregationPass::MemberCounts => "member counts",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while scoring, encoding, aggregating or correlating.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Row {row}: field '{field}' is outside the record ({len} fields)")]
    Schema {
        row: usize,
        field: String,
        len: usize,
    },

    #[error("Row {row}: field '{field}' is not {expected}")]
    FieldState {
        row: usize,
        field: String,
        expected: &'static str,
    },

    #[error("Aggregation of '{variable}': category {code} is missing from the {missing_from} pass")]
    AggregationKey {
        variable: String,
        code: CategoryCode,
        missing_from: AggregationPass,
    },

    #[error("'{variable}' has {points} categories, at least {required} are needed")]
    InsufficientData {
        variable: String,
        points: usize,
        required: usize,
    },

    #[error("Statistics failure: {reason}")]
    Statistics { reason: String },
}

impl AnalysisError {
    /// Creates a schema error for a field outside the record.
    pub fn schema(row: usize, field: impl Into<String>, len: usize) -> Self {
        AnalysisError::Schema {
            row,
            field: field.into(),
            len,
        }
    }

    /// Creates an error for a field holding the wrong kind of value.
    pub fn field_state(row: usize, field: impl Into<String>, expected: &'static str) -> Self {
        AnalysisError::FieldState {
            row,
            field: field.into(),
            expected,
        }
    }

    /// Creates an aggregation key mismatch error.
    pub fn aggregation_key(
        variable: impl Into<String>,
        code: CategoryCode,
        missing_from: AggregationPass,
    ) -> Self {
        AnalysisError::AggregationKey {
            variable: variable.into(),
            code,
            missing_from,
        }
    }

    /// Creates an insufficient data error.
    pub fn insufficient_data(variable: impl Into<String>, points: usize, required: usize) -> Self {
        AnalysisError::InsufficientData {
            variable: variable.into(),
            points,
            required,
        }
    }

    /// Creates a statistics error.
    pub fn statistics(reason: impl Into<String>) -> Self {
        AnalysisError::Statistics {
            reason: reason.into(),
        }
    }

    /// Returns the data row the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            AnalysisError::Schema { row, .. } | AnalysisError::FieldState { row, .. } => Some(*row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_row_and_field() {
        let err = AnalysisError::schema(7, "actual company scale", 9);
        assert_eq!(
            format!("{}", err),
            "Row 7: field 'actual company scale' is outside the record (9 fields)"
        );
        assert_eq!(err.row(), Some(7));
    }

    #[test]
    fn field_state_error_displays_expectation() {
        let err = AnalysisError::field_state(3, "age", "a category code");
        assert_eq!(format!("{}", err), "Row 3: field 'age' is not a category code");
    }

    #[test]
    fn aggregation_key_error_names_pass() {
        let err = AnalysisError::aggregation_key(
            "Degree",
            CategoryCode::new(4),
            AggregationPass::MemberCounts,
        );
        assert_eq!(
            format!("{}", err),
            "Aggregation of 'Degree': category 4 is missing from the member counts pass"
        );
        assert_eq!(err.row(), None);
    }

    #[test]
    fn insufficient_data_displays_counts() {
        let err = AnalysisError::insufficient_data("Gender", 1, 2);
        assert_eq!(
            format!("{}", err),
            "'Gender' has 1 categories, at least 2 are needed"
        );
    }
}
