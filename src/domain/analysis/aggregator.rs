//! Satisfaction Aggregator - mean satisfaction per category of one variable.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::domain::encoding::{CodeColumn, EncodedSurvey};
use crate::domain::foundation::{AggregationPass, AnalysisError, CategoryCode};
use crate::domain::survey::{Respondent, SchemaField, SurveySchema, Variable};

/// A category mean, fixed to two decimal digits.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMean {
    formatted: String,
    value: f64,
}

impl CategoryMean {
    /// Rounds `mean` to two decimals; `value()` is the rounded number.
    pub fn new(mean: f64) -> Self {
        let formatted = format!("{:.2}", mean);
        let value = formatted.parse().unwrap_or(mean);
        Self { formatted, value }
    }

    /// Returns the two-decimal text, e.g. `"0.40"`.
    pub fn as_str(&self) -> &str {
        &self.formatted
    }

    /// Returns the rounded mean as a number.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Serialize for CategoryMean {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted)
    }
}

/// Mean satisfaction per category code for one variable.
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationMap {
    variable: Variable,
    means: BTreeMap<CategoryCode, CategoryMean>,
    members: BTreeMap<CategoryCode, usize>,
}

impl AggregationMap {
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Returns the formatted mean for a category.
    pub fn get(&self, code: CategoryCode) -> Option<&str> {
        self.means.get(&code).map(CategoryMean::as_str)
    }

    /// Returns how many respondents fell into a category.
    pub fn member_count(&self, code: CategoryCode) -> Option<usize> {
        self.members.get(&code).copied()
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Iterates over categories in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryCode, &CategoryMean)> {
        self.means.iter().map(|(code, mean)| (*code, mean))
    }

    pub fn codes(&self) -> impl Iterator<Item = CategoryCode> + '_ {
        self.means.keys().copied()
    }

    /// Returns `(code, rounded mean)` pairs for correlation and plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.iter()
            .map(|(code, mean)| (code.as_f64(), mean.value()))
            .collect()
    }

    /// Returns the plain `code -> "x.xx"` mapping.
    pub fn to_string_map(&self) -> BTreeMap<u8, String> {
        self.iter()
            .map(|(code, mean)| (code.value(), mean.as_str().to_string()))
            .collect()
    }
}

/// Groups respondents by encoded category and averages their satisfaction.
pub struct SatisfactionAggregator;

impl SatisfactionAggregator {
    /// Aggregates one variable.
    ///
    /// # Algorithm
    ///
    /// Two independent passes:
    /// 1. Sum satisfaction per code read from each respondent's `field`.
    /// 2. Count members per code from the encoder's `column`.
    ///
    /// Mean = sum / count, formatted to two decimals.
    ///
    /// # Errors
    ///
    /// - `AnalysisError::AggregationKey` if a code appears in one pass only
    /// - `AnalysisError::FieldState` if `field` was never encoded or a
    ///   respondent was never scored
    /// - `AnalysisError::Schema` if a record is too short
    pub fn aggregate(
        respondents: &[Respondent],
        field: SchemaField,
        column: &CodeColumn,
    ) -> Result<AggregationMap, AnalysisError> {
        let variable = column.variable;

        let mut totals: BTreeMap<CategoryCode, f64> = BTreeMap::new();
        for respondent in respondents {
            let code = respondent.code(field)?;
            let score = respondent.satisfaction()?;
            *totals.entry(code).or_insert(0.0) += score.value();
        }

        let mut members: BTreeMap<CategoryCode, usize> = BTreeMap::new();
        for code in &column.codes {
            *members.entry(*code).or_insert(0) += 1;
        }

        if let Some(code) = members.keys().find(|code| !totals.contains_key(code)) {
            return Err(AnalysisError::aggregation_key(
                variable.name(),
                *code,
                AggregationPass::ScoreTotals,
            ));
        }

        let mut means = BTreeMap::new();
        for (code, total) in &totals {
            let count = members.get(code).copied().ok_or_else(|| {
                AnalysisError::aggregation_key(
                    variable.name(),
                    *code,
                    AggregationPass::MemberCounts,
                )
            })?;
            means.insert(*code, CategoryMean::new(total / count as f64));
        }

        Ok(AggregationMap {
            variable,
            means,
            members,
        })
    }

    /// Aggregates every encoded variable, preserving the fixed variable order.
    pub fn aggregate_all(
        respondents: &[Respondent],
        schema: &SurveySchema,
        encoded: &EncodedSurvey,
    ) -> Result<Vec<AggregationMap>, AnalysisError> {
        encoded
            .columns
            .iter()
            .map(|column| Self::aggregate(respondents, schema.field(column.variable), column))
            .collect()
    }
}
