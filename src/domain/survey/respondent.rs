//! Respondent record - one survey row, encoded in place as the pipeline runs.

use crate::domain::foundation::{AnalysisError, CategoryCode, SatisfactionScore};

use super::SchemaField;

/// Value held at one position of a respondent record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text exactly as read from the input row.
    Raw(String),
    /// Category code written by an encoder.
    Code(CategoryCode),
    /// Derived mean satisfaction, appended by the scorer.
    Satisfaction(SatisfactionScore),
}

impl FieldValue {
    /// Returns the raw text, if the field has not been encoded.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            FieldValue::Raw(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the category code, if the field has been encoded.
    pub fn as_code(&self) -> Option<CategoryCode> {
        match self {
            FieldValue::Code(code) => Some(*code),
            _ => None,
        }
    }
}

/// One survey participant.
///
/// Fields are addressed positionally by the survey schema. Encoders overwrite
/// raw fields with codes exactly once; the scorer appends the satisfaction
/// score as the final field.
#[derive(Debug, Clone, PartialEq)]
pub struct Respondent {
    row: usize,
    fields: Vec<FieldValue>,
}

impl Respondent {
    /// Creates a respondent from the raw fields of data row `row` (1-based).
    pub fn new(row: usize, raw_fields: Vec<String>) -> Self {
        Self {
            row,
            fields: raw_fields.into_iter().map(FieldValue::Raw).collect(),
        }
    }

    /// Convenience constructor from string slices.
    pub fn from_raw<I, S>(row: usize, raw_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(row, raw_fields.into_iter().map(Into::into).collect())
    }

    /// Returns the 1-based data row this respondent was read from.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the current number of fields (including any appended score).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// Iterates over the fields that still hold raw text.
    pub fn raw_values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(FieldValue::as_raw)
    }

    /// Returns the number of answer fields, excluding an appended score.
    pub fn answer_count(&self) -> usize {
        match self.fields.last() {
            Some(FieldValue::Satisfaction(_)) => self.fields.len() - 1,
            _ => self.fields.len(),
        }
    }

    // The appended score is not an answer; landing on it means the row was short.
    fn position(&self, field: SchemaField) -> Result<usize, AnalysisError> {
        match field.index.resolve(self.fields.len()) {
            Some(position) if !matches!(self.fields[position], FieldValue::Satisfaction(_)) => {
                Ok(position)
            }
            _ => Err(AnalysisError::schema(self.row, field.name, self.answer_count())),
        }
    }

    /// Returns the value at a schema position.
    ///
    /// # Errors
    ///
    /// `AnalysisError::Schema` if the record is too short.
    pub fn field(&self, field: SchemaField) -> Result<&FieldValue, AnalysisError> {
        let position = self.position(field)?;
        Ok(&self.fields[position])
    }

    /// Returns the raw text at a schema position.
    pub fn raw(&self, field: SchemaField) -> Result<&str, AnalysisError> {
        self.field(field)?
            .as_raw()
            .ok_or_else(|| AnalysisError::field_state(self.row, field.name, "raw text"))
    }

    /// Returns the category code at a schema position.
    pub fn code(&self, field: SchemaField) -> Result<CategoryCode, AnalysisError> {
        self.field(field)?
            .as_code()
            .ok_or_else(|| AnalysisError::field_state(self.row, field.name, "a category code"))
    }

    /// Overwrites a raw field with its category code.
    ///
    /// # Errors
    ///
    /// `AnalysisError::FieldState` if the field was already encoded.
    pub fn set_code(&mut self, field: SchemaField, code: CategoryCode) -> Result<(), AnalysisError> {
        let position = self.position(field)?;
        match &self.fields[position] {
            FieldValue::Raw(_) => {
                self.fields[position] = FieldValue::Code(code);
                Ok(())
            }
            _ => Err(AnalysisError::field_state(self.row, field.name, "raw text")),
        }
    }

    /// Appends the satisfaction score as the final field.
    ///
    /// # Errors
    ///
    /// `AnalysisError::FieldState` if a score was already appended.
    pub fn append_satisfaction(&mut self, score: SatisfactionScore) -> Result<(), AnalysisError> {
        if self.satisfaction().is_ok() {
            return Err(AnalysisError::field_state(self.row, "satisfaction", "unscored"));
        }
        self.fields.push(FieldValue::Satisfaction(score));
        Ok(())
    }

    /// Returns the appended satisfaction score.
    pub fn satisfaction(&self) -> Result<SatisfactionScore, AnalysisError> {
        match self.fields.last() {
            Some(FieldValue::Satisfaction(score)) => Ok(*score),
            _ => Err(AnalysisError::field_state(
                self.row,
                "satisfaction",
                "a satisfaction score",
            )),
        }
    }
}
