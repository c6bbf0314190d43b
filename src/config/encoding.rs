//! Encoding configuration

use serde::Deserialize;

use crate::domain::encoding::{AgeFallback, EncodingSettings};
use crate::domain::survey::{SurveySchema, DEFAULT_MATCH_OFFSET};

use super::error::ValidationError;

/// Dataset-specific encoding choices
#[derive(Debug, Clone, Deserialize)]
pub struct EncodingConfig {
    /// Code for age brackets missing from the table: `unknown` (0) or `oldest_bracket` (4)
    #[serde(default)]
    pub age_fallback: AgeFallback,

    /// Preference answer meaning "no preference", compared exactly
    #[serde(default = "default_sentinel")]
    pub no_preference_sentinel: String,

    /// Distance from a preference field to its actual field
    #[serde(default = "default_match_offset")]
    pub match_offset: usize,
}

impl EncodingConfig {
    pub fn settings(&self) -> EncodingSettings {
        EncodingSettings {
            schema: SurveySchema::with_match_offset(self.match_offset),
            age_fallback: self.age_fallback,
            no_preference_sentinel: self.no_preference_sentinel.clone(),
        }
    }

    /// Validate encoding configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.no_preference_sentinel.is_empty() {
            return Err(ValidationError::MissingRequired(
                "encoding.no_preference_sentinel",
            ));
        }
        if self.match_offset == 0 {
            return Err(ValidationError::InvalidMatchOffset);
        }
        Ok(())
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            age_fallback: AgeFallback::default(),
            no_preference_sentinel: default_sentinel(),
            match_offset: default_match_offset(),
        }
    }
}

fn default_sentinel() -> String {
    "other".to_string()
}

fn default_match_offset() -> usize {
    DEFAULT_MATCH_OFFSET
}
