//! Adapters - Implementations of port interfaces.
//!
//! - `source` - survey sources (CSV file, in-memory)
//! - `charts` - SVG figures via plotters, or nothing
//! - `report` - console and JSON report sinks

pub mod charts;
pub mod report;
pub mod source;

pub use charts::{NoopChartRenderer, SvgChartRenderer};
pub use report::{ConsoleReportSink, JsonReportSink};
pub use source::{CsvSurveySource, InMemorySurveySource};
