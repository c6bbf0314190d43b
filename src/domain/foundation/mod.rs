//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the survey analysis domain.

mod category_code;
mod errors;
mod likert;
mod satisfaction;

pub use category_code::CategoryCode;
pub use errors::{AggregationPass, AnalysisError};
pub use likert::LikertResponse;
pub use satisfaction::SatisfactionScore;
