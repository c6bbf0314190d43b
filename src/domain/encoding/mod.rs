//! Encoding Module - turns raw survey answers into satisfaction scores and
//! ordinal category codes.
//!
//! # Components
//!
//! - `SatisfactionScorer` - mean of the five Likert items, appended per respondent
//! - `CategoricalEncoder` - literal lookup table with a default for unmapped answers
//! - `DegreeEncoder` - leading-letter classification of free-text degree names
//! - `MatchEncoder` - preferred versus actual answer: match / mismatch / not applicable
//! - `EncodingPipeline` - runs all of the above in the fixed variable order
//!
//! Every encoder overwrites its field in place and also returns the codes as
//! a `CodeColumn` parallel to respondent order.

mod categorical;
mod column;
mod degree;
mod lookup_tables;
mod matching;
mod pipeline;
mod scoring;

pub use categorical::CategoricalEncoder;
pub use column::CodeColumn;
pub use degree::DegreeEncoder;
pub use lookup_tables::{LookupTable, AGE_TABLE, ENTRY_LEVEL_TABLE, GENDER_TABLE, SALARY_TABLE};
pub use matching::{MatchEncoder, MatchOutcome};
pub use pipeline::{AgeFallback, EncodedSurvey, EncodingPipeline, EncodingSettings};
pub use scoring::{SatisfactionScorer, SATISFACTION_ITEM_COUNT};
