//! Survey input configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where respondents are read from
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Survey export, header line first
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Field separator, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl InputConfig {
    /// Returns the delimiter as a byte, if it is a single ASCII character.
    pub fn delimiter_byte(&self) -> Option<u8> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Some(*byte),
            _ => None,
        }
    }

    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("input.path"));
        }
        if self.delimiter_byte().is_none() {
            return Err(ValidationError::InvalidDelimiter(self.delimiter.clone()));
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("survey.csv")
}

fn default_delimiter() -> String {
    ",".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.path, PathBuf::from("survey.csv"));
        assert_eq!(config.delimiter_byte(), Some(b','));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_multi_character_delimiter() {
        let config = InputConfig {
            delimiter: ";;".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidDelimiter(";;".to_string()))
        );
    }

    #[test]
    fn test_validation_non_ascii_delimiter() {
        let config = InputConfig {
            delimiter: "–".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_path() {
        let config = InputConfig {
            path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("input.path"))
        );
    }
}
