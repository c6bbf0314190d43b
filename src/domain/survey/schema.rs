//! Fixed positional schema of the alumni survey export.

use super::{FieldIndex, SchemaField, Variable};

/// Default distance from a "preferred X" answer to the matching "actual X" answer.
pub const DEFAULT_MATCH_OFFSET: usize = 8;

/// Where each analysed answer lives in a respondent record.
///
/// Salary is addressed from the back of the record after the satisfaction
/// score has been appended, so `End(4)` is raw position `raw_len - 3`. On rows
/// of 15 or 16 answers that position coincides with an "actual X" field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveySchema {
    pub age: FieldIndex,
    pub gender: FieldIndex,
    pub degree: FieldIndex,
    pub entry_level: FieldIndex,
    pub preferred_company_scale: FieldIndex,
    pub preferred_position: FieldIndex,
    pub salary: FieldIndex,
    pub match_offset: usize,
}

impl Default for SurveySchema {
    fn default() -> Self {
        Self {
            age: FieldIndex::Start(0),
            gender: FieldIndex::Start(1),
            degree: FieldIndex::Start(2),
            entry_level: FieldIndex::Start(3),
            preferred_company_scale: FieldIndex::Start(4),
            preferred_position: FieldIndex::Start(5),
            salary: FieldIndex::End(4),
            match_offset: DEFAULT_MATCH_OFFSET,
        }
    }
}

impl SurveySchema {
    /// Default positions with a different preference-to-actual distance.
    pub fn with_match_offset(match_offset: usize) -> Self {
        Self {
            match_offset,
            ..Self::default()
        }
    }

    /// Returns the field a variable is encoded into (and aggregated from).
    pub fn field(&self, variable: Variable) -> SchemaField {
        match variable {
            Variable::Age => SchemaField::new("age", self.age),
            Variable::Gender => SchemaField::new("gender", self.gender),
            Variable::Degree => SchemaField::new("degree", self.degree),
            Variable::EntryLevel => SchemaField::new("entry level", self.entry_level),
            Variable::Salary => SchemaField::new("salary", self.salary),
            Variable::CompanyMatch => {
                SchemaField::new("preferred company scale", self.preferred_company_scale)
            }
            Variable::PositionMatch => {
                SchemaField::new("preferred position", self.preferred_position)
            }
        }
    }

    pub fn actual_company_scale(&self) -> SchemaField {
        SchemaField::new(
            "actual company scale",
            self.preferred_company_scale.shifted(self.match_offset),
        )
    }

    pub fn actual_position(&self) -> SchemaField {
        SchemaField::new(
            "actual position",
            self.preferred_position.shifted(self.match_offset),
        )
    }

    /// Returns the "actual X" field a match variable is compared against.
    pub fn actual_field(&self, variable: Variable) -> Option<SchemaField> {
        match variable {
            Variable::CompanyMatch => Some(self.actual_company_scale()),
            Variable::PositionMatch => Some(self.actual_position()),
            _ => None,
        }
    }
}
