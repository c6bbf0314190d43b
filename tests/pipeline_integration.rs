//! End-to-end runs over CSV files on disk.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tempfile::{NamedTempFile, TempDir};

use survey_satisfaction::adapters::{
    CsvSurveySource, JsonReportSink, NoopChartRenderer, SvgChartRenderer,
};
use survey_satisfaction::application::{PipelineError, RunAnalysisCommand, RunAnalysisHandler};
use survey_satisfaction::domain::analysis::SatisfactionAggregator;
use survey_satisfaction::domain::encoding::{AgeFallback, EncodingSettings};
use survey_satisfaction::domain::foundation::{AnalysisError, CategoryCode};
use survey_satisfaction::domain::survey::Variable;
use survey_satisfaction::ports::LoadError;

const HEADER: &str = "Age,Gender,Degree,Entry,PrefScale,PrefPosition,S1,S2,S3,S4,S5,Q11,Scale,Position,Salary,Q15,Q16";

const ROWS: &[&str] = &[
    "17 – 21 years,I am a man.,Associate of Science,Yes,Small,Developer,Agree,Agree,Undecided,Disagree,Agree,x,Small,Developer,Under 20000,y,z",
    "22 – 30 years,I am a woman.,Bachelor of Arts,No,Large,Analyst,Strongly Agree,Agree,Agree,Agree,Agree,x,Small,Developer,40001 to 60000,y,z",
    "31 – 40 years,Prefer not to say,Master of Science,No,other,Manager,Strongly Agree,Strongly Agree,Agree,Agree,Undecided,x,Large,Manager,Over 120000,y,z",
    "51 – 60 years,I am a woman.,PhD in Physics,No,Large,Manager,Agree,Undecided,Undecided,Undecided,Disagree,x,Large,Analyst,80001 to 100000,y,z",
    "22 – 30 years,I am a man.,Diploma of Nursing,Yes,Medium,Analyst,Disagree,Disagree,Undecided,Agree,Strongly Disagree,x,Small,Analyst,Under 20000,y,z",
];

fn survey_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

fn handler(path: &Path) -> RunAnalysisHandler {
    RunAnalysisHandler::new(
        Arc::new(CsvSurveySource::new(path)),
        Arc::new(NoopChartRenderer),
    )
}

#[test]
fn full_run_produces_seven_variables() {
    let file = survey_file(ROWS);

    let result = handler(file.path())
        .handle(RunAnalysisCommand::default())
        .unwrap();

    assert_eq!(result.report.respondents, 5);
    assert_eq!(result.report.variables.len(), 7);

    let age = &result.report.variable(Variable::Age).unwrap().means;
    // "51 – 60 years" is not in the age table and falls back to 0.
    assert_eq!(age.get(CategoryCode::new(0)), Some("0.00"));
    // (1.2 + -0.6) / 2
    assert_eq!(age.get(CategoryCode::new(2)), Some("0.30"));
    assert_eq!(
        result.report.variable(Variable::Age).unwrap().defaults_applied,
        1
    );

    let degree = &result.report.variable(Variable::Degree).unwrap().means;
    let codes: Vec<u8> = degree.codes().map(|c| c.value()).collect();
    assert_eq!(codes, vec![0, 1, 2, 3, 4]);
}

#[test]
fn oldest_bracket_fallback_changes_age_keys() {
    let file = survey_file(ROWS);
    let settings = EncodingSettings {
        age_fallback: AgeFallback::OldestBracket,
        ..EncodingSettings::default()
    };

    let result = handler(file.path())
        .handle(RunAnalysisCommand { settings })
        .unwrap();

    let age = &result.report.variable(Variable::Age).unwrap().means;
    let codes: Vec<u8> = age.codes().map(|c| c.value()).collect();
    assert_eq!(codes, vec![1, 2, 3, 4]);
}

#[test]
fn rerunning_the_same_file_is_identical() {
    let file = survey_file(ROWS);
    let handler = handler(file.path());

    let first = handler.handle(RunAnalysisCommand::default()).unwrap();
    let second = handler.handle(RunAnalysisCommand::default()).unwrap();

    for (a, b) in first.report.variables.iter().zip(&second.report.variables) {
        assert_eq!(a.means, b.means);
        assert_eq!(
            serde_json::to_string(&a.means).unwrap(),
            serde_json::to_string(&b.means).unwrap()
        );
    }
}

#[test]
fn aggregation_keys_equal_encoded_codes() {
    let file = survey_file(ROWS);

    let result = handler(file.path())
        .handle(RunAnalysisCommand::default())
        .unwrap();

    for (variable, column) in result.report.variables.iter().zip(&result.encoded.columns) {
        let keys: Vec<CategoryCode> = variable.means.codes().collect();
        let distinct: Vec<CategoryCode> = column.distinct_codes().into_iter().collect();
        assert_eq!(keys, distinct, "{}", variable.variable);
    }

    // The encoded records aggregate to the same maps on their own.
    let schema = EncodingSettings::default().schema;
    let maps =
        SatisfactionAggregator::aggregate_all(&result.respondents, &schema, &result.encoded)
            .unwrap();
    for (map, report) in maps.iter().zip(&result.report.variables) {
        assert_eq!(map, &report.means);
    }
}

#[test]
fn missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();

    let err = handler(&dir.path().join("missing.csv"))
        .handle(RunAnalysisCommand::default())
        .unwrap_err();

    assert!(matches!(err, PipelineError::Load(LoadError::NotFound { .. })));
}

#[test]
fn short_row_is_schema_error_naming_row() {
    let mut rows = ROWS.to_vec();
    rows.push("22 – 30 years,I am a man.,Bachelor of Arts");
    let file = survey_file(&rows);

    let err = handler(file.path())
        .handle(RunAnalysisCommand::default())
        .unwrap_err();

    match err {
        PipelineError::Analysis(AnalysisError::Schema { row, field, .. }) => {
            assert_eq!(row, 6);
            assert_eq!(field, "entry level");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn charts_and_json_report_are_written() {
    let file = survey_file(ROWS);
    let out = TempDir::new().unwrap();
    let chart_dir = out.path().join("figures");
    let report_path = out.path().join("report.json");

    let result = RunAnalysisHandler::new(
        Arc::new(CsvSurveySource::new(file.path())),
        Arc::new(SvgChartRenderer::new(&chart_dir, 640, 480)),
    )
    .with_sink(Arc::new(JsonReportSink::new(&report_path)))
    .handle(RunAnalysisCommand::default())
    .unwrap();

    for variable in Variable::ALL {
        let chart = result.report.variable(variable).unwrap().chart.clone().unwrap();
        assert!(chart.starts_with(&chart_dir));
        let svg = std::fs::read_to_string(&chart).unwrap();
        assert!(svg.contains("<svg"));
    }

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["respondents"], 5);
    assert_eq!(json["variables"][0]["variable"], "age");
    assert_eq!(json["variables"][0]["means"]["means"]["2"], "0.30");
}
