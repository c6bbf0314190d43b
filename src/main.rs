//! Survey Satisfaction - command-line entry point
//!
//! Runs one analysis over a survey export and prints the results. The only
//! argument is an optional path overriding the configured input file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use survey_satisfaction::adapters::{
    ConsoleReportSink, CsvSurveySource, JsonReportSink, NoopChartRenderer, SvgChartRenderer,
};
use survey_satisfaction::application::{RunAnalysisCommand, RunAnalysisHandler};
use survey_satisfaction::config::{AppConfig, LogFormat, LoggingConfig};
use survey_satisfaction::ports::ChartRenderer;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "survey-satisfaction")]
#[command(about = "Relate alumni job satisfaction to demographics and job fit")]
#[command(version)]
struct Args {
    /// Survey export to analyse (defaults to the configured input path)
    input: Option<PathBuf>,
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&logging.level)
        .with_context(|| format!("Invalid log filter '{}'", logging.level))?;

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load()
        .context("Failed to load configuration")?
        .with_input_path(args.input);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging)?;

    let delimiter = config
        .input
        .delimiter_byte()
        .context("Delimiter must be a single ASCII character")?;
    let source = CsvSurveySource::new(&config.input.path).with_delimiter(delimiter);

    let renderer: Arc<dyn ChartRenderer> = if config.output.charts_enabled {
        Arc::new(SvgChartRenderer::new(
            &config.output.chart_dir,
            config.output.chart_width,
            config.output.chart_height,
        ))
    } else {
        Arc::new(NoopChartRenderer)
    };

    let mut handler = RunAnalysisHandler::new(Arc::new(source), renderer)
        .with_sink(Arc::new(ConsoleReportSink));
    if let Some(path) = &config.output.report_path {
        handler = handler.with_sink(Arc::new(JsonReportSink::new(path)));
    }

    let result = handler
        .handle(RunAnalysisCommand {
            settings: config.encoding_settings(),
        })
        .with_context(|| format!("Analysis of {} failed", config.input.path.display()))?;

    info!(
        respondents = result.report.respondents,
        variables = result.report.variables.len(),
        "Done"
    );
    Ok(())
}
