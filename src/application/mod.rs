//! Application layer - Commands and Handlers.
//!
//! Orchestrates one analysis run across the domain and the ports.

pub mod handlers;

pub use handlers::{PipelineError, RunAnalysisCommand, RunAnalysisHandler, RunAnalysisResult};
