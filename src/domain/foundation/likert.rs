//! Likert response value object (-2 to +2 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-point agreement answer: -2 (strongly disagree) to +2 (strongly agree).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum LikertResponse {
    StronglyDisagree = -2,
    Disagree = -1,
    #[default]
    Undecided = 0,
    Agree = 1,
    StronglyAgree = 2,
}

impl LikertResponse {
    /// All responses from lowest to highest.
    pub const ALL: [LikertResponse; 5] = [
        LikertResponse::StronglyDisagree,
        LikertResponse::Disagree,
        LikertResponse::Undecided,
        LikertResponse::Agree,
        LikertResponse::StronglyAgree,
    ];

    /// Parses the exact survey wording. Case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Strongly Agree" => Some(LikertResponse::StronglyAgree),
            "Agree" => Some(LikertResponse::Agree),
            "Undecided" => Some(LikertResponse::Undecided),
            "Disagree" => Some(LikertResponse::Disagree),
            "Strongly Disagree" => Some(LikertResponse::StronglyDisagree),
            _ => None,
        }
    }

    /// Returns the numeric score.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Returns the survey wording.
    pub fn label(&self) -> &'static str {
        match self {
            LikertResponse::StronglyDisagree => "Strongly Disagree",
            LikertResponse::Disagree => "Disagree",
            LikertResponse::Undecided => "Undecided",
            LikertResponse::Agree => "Agree",
            LikertResponse::StronglyAgree => "Strongly Agree",
        }
    }
}

impl fmt::Display for LikertResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value() > 0 { "+" } else { "" };
        write!(f, "{}{}", sign, self.value())
    }
}
