//! Ports - Interfaces for external dependencies.
//!
//! The domain never touches files directly. Loading records, drawing charts
//! and publishing reports go through these traits, and adapters implement them.
//!
//! - `SurveySource` - yields raw respondent records
//! - `ChartRenderer` - draws one figure per analysed variable
//! - `ReportSink` - publishes the finished `AnalysisReport`

mod chart_renderer;
mod report_sink;
mod survey_source;

pub use chart_renderer::{ChartRenderer, ChartRequest, RenderError};
pub use report_sink::{ReportError, ReportSink};
pub use survey_source::{LoadError, SurveySource};
