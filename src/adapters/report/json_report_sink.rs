//! JSON Report Sink - writes the report as pretty-printed JSON.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::analysis::AnalysisReport;
use crate::ports::{ReportError, ReportSink};

#[derive(Debug, Clone)]
pub struct JsonReportSink {
    path: PathBuf,
}

impl JsonReportSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn write_error(&self, e: std::io::Error) -> ReportError {
        ReportError::Write {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}

impl ReportSink for JsonReportSink {
    fn publish(&self, report: &AnalysisReport) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| self.write_error(e))?;

        info!(path = %self.path.display(), "Report written");
        Ok(())
    }
}
