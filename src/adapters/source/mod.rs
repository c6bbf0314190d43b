//! Survey sources - CSV files and in-memory fixtures.

mod csv_survey_source;
mod in_memory_survey_source;

pub use csv_survey_source::CsvSurveySource;
pub use in_memory_survey_source::InMemorySurveySource;
