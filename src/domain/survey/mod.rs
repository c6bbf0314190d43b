//! Survey module - respondent records and the positional survey schema.

mod field_index;
mod respondent;
mod schema;
mod variable;

pub use field_index::{FieldIndex, SchemaField};
pub use respondent::{FieldValue, Respondent};
pub use schema::{SurveySchema, DEFAULT_MATCH_OFFSET};
pub use variable::Variable;
