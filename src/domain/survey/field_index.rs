//! Positional addressing of respondent fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a field inside a respondent record.
///
/// `End(k)` counts from the back of the record as it stands when accessed,
/// so `End(4)` is `len - 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIndex {
    Start(usize),
    End(usize),
}

impl FieldIndex {
    /// Resolves to an absolute position for a record of `len` fields.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        match *self {
            FieldIndex::Start(i) if i < len => Some(i),
            FieldIndex::Start(_) => None,
            FieldIndex::End(0) => None,
            FieldIndex::End(k) => len.checked_sub(k),
        }
    }

    /// Returns the index shifted forward by `offset` positions.
    ///
    /// Only meaningful for `Start` indices; `End` indices move toward the back.
    pub fn shifted(&self, offset: usize) -> FieldIndex {
        match *self {
            FieldIndex::Start(i) => FieldIndex::Start(i + offset),
            FieldIndex::End(k) => FieldIndex::End(k.saturating_sub(offset)),
        }
    }
}

impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIndex::Start(i) => write!(f, "{}", i),
            FieldIndex::End(k) => write!(f, "len-{}", k),
        }
    }
}

/// A named schema position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaField {
    pub name: &'static str,
    pub index: FieldIndex,
}

impl SchemaField {
    pub const fn new(name: &'static str, index: FieldIndex) -> Self {
        Self { name, index }
    }
}
