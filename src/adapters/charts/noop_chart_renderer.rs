//! Renderer used when charts are disabled.

use std::path::PathBuf;

use tracing::debug;

use crate::ports::{ChartRenderer, ChartRequest, RenderError};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChartRenderer;

impl ChartRenderer for NoopChartRenderer {
    fn render(&self, request: &ChartRequest<'_>) -> Result<Option<PathBuf>, RenderError> {
        debug!(variable = %request.variable, "Chart rendering disabled");
        Ok(None)
    }
}
