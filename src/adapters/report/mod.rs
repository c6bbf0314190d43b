//! Report sinks.

mod console_report_sink;
mod json_report_sink;

pub use console_report_sink::ConsoleReportSink;
pub use json_report_sink::JsonReportSink;
