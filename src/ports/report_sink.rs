//! Report Sink Port - publishes a finished analysis.

use thiserror::Error;

use crate::domain::analysis::AnalysisReport;

/// Errors that can occur while publishing a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    #[error("Failed to write report to {path}: {message}")]
    Write { path: String, message: String },
}

/// Port for report publication.
pub trait ReportSink: Send + Sync {
    fn publish(&self, report: &AnalysisReport) -> Result<(), ReportError>;
}
