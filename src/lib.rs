//! Survey Satisfaction - job satisfaction analysis for alumni career surveys
//!
//! Loads survey responses, scores each respondent's job satisfaction from five
//! Likert items, encodes demographic and preference answers into ordinal
//! category codes, and relates every variable to mean satisfaction through
//! correlation coefficients and scatter plots.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
