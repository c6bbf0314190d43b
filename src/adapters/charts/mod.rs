//! Chart renderers.

mod noop_chart_renderer;
mod svg_chart_renderer;

pub use noop_chart_renderer::NoopChartRenderer;
pub use svg_chart_renderer::SvgChartRenderer;
