//! Application handlers.

pub mod analysis;

pub use analysis::{PipelineError, RunAnalysisCommand, RunAnalysisHandler, RunAnalysisResult};
