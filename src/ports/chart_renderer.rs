//! Chart Renderer Port - draws a scatter plot with regression line per variable.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::analysis::{AggregationMap, LinearFit};
use crate::domain::survey::Variable;

/// Errors that can occur while drawing a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Failed to prepare chart directory {path}: {message}")]
    Directory { path: String, message: String },

    #[error("Failed to draw figure {figure}: {message}")]
    Drawing { figure: usize, message: String },
}

/// Everything a renderer needs for one figure.
#[derive(Debug, Clone, Copy)]
pub struct ChartRequest<'a> {
    pub variable: Variable,
    pub map: &'a AggregationMap,
    pub fit: Option<LinearFit>,
}

impl<'a> ChartRequest<'a> {
    pub fn new(map: &'a AggregationMap, fit: Option<LinearFit>) -> Self {
        Self {
            variable: map.variable(),
            map,
            fit,
        }
    }

    /// Annotated points: `(code, rounded mean, "x.xx")`.
    pub fn annotated_points(&self) -> Vec<(f64, f64, &'a str)> {
        self.map
            .iter()
            .map(|(code, mean)| (code.as_f64(), mean.value(), mean.as_str()))
            .collect()
    }
}

/// Port for chart output.
pub trait ChartRenderer: Send + Sync {
    /// Draws one figure.
    ///
    /// Returns the written file, or `None` when the renderer produces no file.
    fn render(&self, request: &ChartRequest<'_>) -> Result<Option<PathBuf>, RenderError>;
}
