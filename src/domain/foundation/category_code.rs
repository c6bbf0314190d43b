//! CategoryCode value object - small ordinal code for a bucketed answer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal code assigned to a categorical survey answer.
///
/// `0` conventionally means "unknown / not applicable / other".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCode(u8);

impl CategoryCode {
    /// The "unknown / not applicable / other" code.
    pub const UNKNOWN: CategoryCode = CategoryCode(0);

    /// Creates a code from its numeric value.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the code as an x coordinate for correlation and plotting.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns true for the "unknown / not applicable / other" code.
    pub fn is_unknown(&self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for CategoryCode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
