//! SatisfactionScore value object - a respondent's mean Likert score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean satisfaction for one respondent, nominally in `[-2, 2]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SatisfactionScore(f64);

impl SatisfactionScore {
    /// Lowest score on the scale.
    pub const MIN: f64 = -2.0;
    /// Highest score on the scale.
    pub const MAX: f64 = 2.0;

    /// Wraps a computed score.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the score lies on the `[-2, 2]` scale.
    pub fn is_within_scale(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl fmt::Display for SatisfactionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_bounds_are_inclusive() {
        assert!(SatisfactionScore::new(2.0).is_within_scale());
        assert!(SatisfactionScore::new(-2.0).is_within_scale());
        assert!(!SatisfactionScore::new(2.2).is_within_scale());
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(SatisfactionScore::new(0.4).to_string(), "0.40");
        assert_eq!(SatisfactionScore::new(-1.0).to_string(), "-1.00");
    }
}
