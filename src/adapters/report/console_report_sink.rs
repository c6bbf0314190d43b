//! Console Report Sink - prints category means and correlations to stdout.

use std::io::Write;

use crate::domain::analysis::{AnalysisReport, VariableReport};
use crate::ports::{ReportError, ReportSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReportSink;

impl ConsoleReportSink {
    /// Formats the report as plain text, one blank line after each section.
    pub fn render(report: &AnalysisReport) -> String {
        let mut lines = vec![format!(
            "Survey: {} ({} respondents)",
            report.source, report.respondents
        )];
        if let Some(overall) = report.overall_satisfaction {
            lines.push(format!("Overall satisfaction: {:.2}", overall));
        }
        lines.push(String::new());

        for variable in &report.variables {
            lines.extend(Self::variable_lines(variable));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn variable_lines(report: &VariableReport) -> Vec<String> {
        let mut lines = vec![report.title.to_string()];

        lines.extend(report.means.iter().map(|(code, mean)| {
            let label = report
                .variable
                .category_label(code.value())
                .unwrap_or("Unlabelled");
            let members = report.means.member_count(code).unwrap_or(0);
            format!("  {} ({}): {} [n={}]", code, label, mean.as_str(), members)
        }));

        let pearson = report.correlation.pearson;
        let spearman = report.correlation.spearman;
        lines.push(format!(
            "The Pearson's r is {}, p-value is {}.",
            pearson.coefficient, pearson.p_value
        ));
        lines.push(format!(
            "The Spearman coefficient is {}, p-value is {}.",
            spearman.coefficient, spearman.p_value
        ));
        if let Some(chart) = &report.chart {
            lines.push(format!("Chart: {}", chart.display()));
        }
        lines.push(String::new());
        lines
    }
}

impl ReportSink for ConsoleReportSink {
    fn publish(&self, report: &AnalysisReport) -> Result<(), ReportError> {
        let text = Self::render(report);
        std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| ReportError::Write {
                path: "stdout".to_string(),
                message: e.to_string(),
            })
    }
}
