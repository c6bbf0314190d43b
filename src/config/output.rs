//! Output configuration (charts and report file)

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where figures and the JSON report go
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Draw one SVG figure per variable
    #[serde(default = "default_charts_enabled")]
    pub charts_enabled: bool,

    #[serde(default = "default_chart_dir")]
    pub chart_dir: PathBuf,

    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    #[serde(default = "default_chart_height")]
    pub chart_height: u32,

    /// Write the report as JSON to this path as well as printing it
    pub report_path: Option<PathBuf>,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(ValidationError::InvalidChartSize {
                width: self.chart_width,
                height: self.chart_height,
            });
        }
        if self.charts_enabled && self.chart_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("output.chart_dir"));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            charts_enabled: default_charts_enabled(),
            chart_dir: default_chart_dir(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            report_path: None,
        }
    }
}

fn default_charts_enabled() -> bool {
    true
}

fn default_chart_dir() -> PathBuf {
    PathBuf::from("figures")
}

fn default_chart_width() -> u32 {
    800
}

fn default_chart_height() -> u32 {
    600
}
