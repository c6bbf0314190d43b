//! RunAnalysisHandler - one batch run over a survey.
//!
//! Stages run strictly in sequence and the first failure aborts the run:
//! 1. Load respondents from the survey source
//! 2. Score satisfaction and encode every variable
//! 3. Aggregate mean satisfaction per category
//! 4. Correlate codes with means and fit the regression line
//! 5. Render one chart per variable
//! 6. Publish the report to every sink
//!
//! Nothing is published unless every stage succeeds.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{
    AnalysisReport, CorrelationAnalyzer, LinearFit, SatisfactionAggregator, VariableReport,
};
use crate::domain::encoding::{EncodedSurvey, EncodingPipeline, EncodingSettings};
use crate::domain::foundation::AnalysisError;
use crate::domain::survey::Respondent;
use crate::ports::{
    ChartRenderer, ChartRequest, LoadError, RenderError, ReportError, ReportSink, SurveySource,
};

/// Command to analyse a survey.
#[derive(Debug, Clone, Default)]
pub struct RunAnalysisCommand {
    pub settings: EncodingSettings,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub report: AnalysisReport,
    /// Scored and encoded respondents.
    pub respondents: Vec<Respondent>,
    pub encoded: EncodedSurvey,
}

/// Error type for an analysis run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Handler for analysis runs.
pub struct RunAnalysisHandler {
    source: Arc<dyn SurveySource>,
    renderer: Arc<dyn ChartRenderer>,
    sinks: Vec<Arc<dyn ReportSink>>,
}

impl RunAnalysisHandler {
    pub fn new(source: Arc<dyn SurveySource>, renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            source,
            renderer,
            sinks: Vec::new(),
        }
    }

    /// Adds a sink that receives the report after a successful run.
    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn handle(&self, cmd: RunAnalysisCommand) -> Result<RunAnalysisResult, PipelineError> {
        // 1. Load
        let mut respondents = self.source.load()?;
        info!(
            source = %self.source.describe(),
            respondents = respondents.len(),
            "Analysis started"
        );

        // 2. Score and encode
        let pipeline = EncodingPipeline::new(cmd.settings);
        let encoded = pipeline.run(&mut respondents)?;

        // 3. Aggregate
        let maps = SatisfactionAggregator::aggregate_all(
            &respondents,
            &pipeline.settings().schema,
            &encoded,
        )?;

        let mut report = AnalysisReport::new(self.source.describe(), respondents.len());
        report.overall_satisfaction = encoded.overall_satisfaction();

        // 4-5. Correlate, fit and render
        for (map, column) in maps.into_iter().zip(&encoded.columns) {
            let correlation = CorrelationAnalyzer::summarize(&map)?;
            let regression = LinearFit::fit(&map.points());
            let chart = self.renderer.render(&ChartRequest::new(&map, regression))?;

            debug!(
                variable = %map.variable(),
                categories = map.len(),
                pearson = correlation.pearson.coefficient,
                "Variable analysed"
            );

            report.variables.push(VariableReport {
                variable: map.variable(),
                title: map.variable().figure_title(),
                correlation,
                regression,
                defaults_applied: column.defaults_applied,
                chart,
                means: map,
            });
        }

        // 6. Publish
        for sink in &self.sinks {
            sink.publish(&report)?;
        }

        info!(variables = report.variables.len(), "Analysis complete");
        Ok(RunAnalysisResult {
            report,
            respondents,
            encoded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::adapters::{InMemorySurveySource, NoopChartRenderer};
    use crate::domain::foundation::CategoryCode;
    use crate::domain::survey::Variable;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    struct RecordingRenderer {
        rendered: Mutex<Vec<Variable>>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self {
                rendered: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&self, request: &ChartRequest<'_>) -> Result<Option<PathBuf>, RenderError> {
            self.rendered.lock().unwrap().push(request.variable);
            Ok(Some(PathBuf::from(format!("{}.svg", request.variable.slug()))))
        }
    }

    struct CountingSink {
        published: Mutex<usize>,
    }

    impl ReportSink for CountingSink {
        fn publish(&self, _report: &AnalysisReport) -> Result<(), ReportError> {
            *self.published.lock().unwrap() += 1;
            Ok(())
        }
    }

    /// 17 fields: age, gender, degree, entry, preferred scale, preferred
    /// position, five Likert items, filler, actual scale, actual position,
    /// salary, two trailing answers.
    fn line(
        age: &str,
        gender: &str,
        degree: &str,
        entry: &str,
        pref: (&str, &str),
        likert: &str,
        actual: (&str, &str),
        salary: &str,
    ) -> String {
        format!(
            "{age},{gender},{degree},{entry},{},{},{likert},x,{},{},{salary},y,z",
            pref.0, pref.1, actual.0, actual.1
        )
    }

    fn sample_source() -> InMemorySurveySource {
        InMemorySurveySource::from_lines([
            line(
                "17 – 21 years",
                "I am a man.",
                "Associate of Arts",
                "Yes",
                ("Small", "Developer"),
                "Agree,Agree,Undecided,Disagree,Agree",
                ("Small", "Developer"),
                "Under 20000",
            ),
            line(
                "22 – 30 years",
                "I am a woman.",
                "Bachelor of Science",
                "No",
                ("Large", "Analyst"),
                "Strongly Agree,Agree,Agree,Agree,Agree",
                ("Small", "Developer"),
                "40001 to 60000",
            ),
            line(
                "31 – 40 years",
                "Prefer not to say",
                "Master of Science",
                "No",
                ("other", "Manager"),
                "Strongly Agree,Strongly Agree,Agree,Agree,Undecided",
                ("Large", "Manager"),
                "Over 120000",
            ),
        ])
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn run_reports_every_variable_in_order() {
        let renderer = Arc::new(RecordingRenderer::new());
        let handler = RunAnalysisHandler::new(Arc::new(sample_source()), renderer.clone());

        let result = handler.handle(RunAnalysisCommand::default()).unwrap();

        let order: Vec<Variable> = result.report.variables.iter().map(|v| v.variable).collect();
        assert_eq!(order, Variable::ALL.to_vec());
        assert_eq!(*renderer.rendered.lock().unwrap(), Variable::ALL.to_vec());
        assert_eq!(result.report.respondents, 3);
        assert_eq!(
            result.report.variable(Variable::Age).unwrap().chart,
            Some(PathBuf::from("age.svg"))
        );
    }

    #[test]
    fn age_means_match_scores() {
        let handler =
            RunAnalysisHandler::new(Arc::new(sample_source()), Arc::new(NoopChartRenderer));

        let result = handler.handle(RunAnalysisCommand::default()).unwrap();

        let age = &result.report.variable(Variable::Age).unwrap().means;
        // (1+1+0-1+1)/5, (2+1+1+1+1)/5, (2+2+1+1+0)/5
        assert_eq!(age.get(CategoryCode::new(1)), Some("0.40"));
        assert_eq!(age.get(CategoryCode::new(2)), Some("1.20"));
        assert_eq!(age.get(CategoryCode::new(3)), Some("1.20"));
    }

    #[test]
    fn match_codes_reach_the_report() {
        let handler =
            RunAnalysisHandler::new(Arc::new(sample_source()), Arc::new(NoopChartRenderer));

        let result = handler.handle(RunAnalysisCommand::default()).unwrap();

        let company = result.encoded.column(Variable::CompanyMatch).unwrap();
        let codes: Vec<u8> = company.codes.iter().map(|c| c.value()).collect();
        assert_eq!(codes, vec![2, 1, 0]);
        let position = result.encoded.column(Variable::PositionMatch).unwrap();
        let codes: Vec<u8> = position.codes.iter().map(|c| c.value()).collect();
        assert_eq!(codes, vec![2, 1, 2]);
    }

    #[test]
    fn sinks_receive_report_once() {
        let sink = Arc::new(CountingSink {
            published: Mutex::new(0),
        });
        let handler =
            RunAnalysisHandler::new(Arc::new(sample_source()), Arc::new(NoopChartRenderer))
                .with_sink(sink.clone());

        handler.handle(RunAnalysisCommand::default()).unwrap();

        assert_eq!(*sink.published.lock().unwrap(), 1);
    }

    #[test]
    fn short_row_aborts_without_publishing() {
        let sink = Arc::new(CountingSink {
            published: Mutex::new(0),
        });
        let source = InMemorySurveySource::from_lines(["17 – 21 years,I am a man."]);
        let handler = RunAnalysisHandler::new(Arc::new(source), Arc::new(NoopChartRenderer))
            .with_sink(sink.clone());

        let err = handler.handle(RunAnalysisCommand::default()).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Analysis(AnalysisError::Schema { row: 1, .. })
        ));
        assert_eq!(*sink.published.lock().unwrap(), 0);
    }

    #[test]
    fn single_category_is_insufficient_data() {
        let source = InMemorySurveySource::from_lines([line(
            "17 – 21 years",
            "I am a man.",
            "Associate of Arts",
            "Yes",
            ("Small", "Developer"),
            "Agree,Agree,Agree,Agree,Agree",
            ("Small", "Developer"),
            "Under 20000",
        )]);
        let handler = RunAnalysisHandler::new(Arc::new(source), Arc::new(NoopChartRenderer));

        let err = handler.handle(RunAnalysisCommand::default()).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Analysis(AnalysisError::InsufficientData { .. })
        ));
    }
}
