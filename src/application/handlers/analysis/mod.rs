//! Analysis command handlers.

mod run_analysis;

pub use run_analysis::{PipelineError, RunAnalysisCommand, RunAnalysisHandler, RunAnalysisResult};
