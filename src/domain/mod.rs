//! Domain layer containing survey types and analysis logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (category codes, Likert responses, errors)
//! - `survey` - Respondent records, field addressing and the dataset schema
//! - `encoding` - Satisfaction scoring and categorical encoders
//! - `analysis` - Aggregation, correlation and regression

pub mod analysis;
pub mod encoding;
pub mod foundation;
pub mod survey;
