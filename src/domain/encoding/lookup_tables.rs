//! Literal answer-to-code tables for the closed-choice survey questions.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::CategoryCode;

/// Case-sensitive mapping from an exact survey answer to its code.
#[derive(Debug, Clone)]
pub struct LookupTable {
    name: &'static str,
    entries: HashMap<&'static str, CategoryCode>,
}

impl LookupTable {
    /// Builds a table from `(answer, code)` pairs.
    pub fn new(name: &'static str, entries: &[(&'static str, u8)]) -> Self {
        Self {
            name,
            entries: entries
                .iter()
                .map(|(answer, code)| (*answer, CategoryCode::new(*code)))
                .collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the code for an exact answer.
    pub fn get(&self, answer: &str) -> Option<CategoryCode> {
        self.entries.get(answer).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(answer, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, CategoryCode)> + '_ {
        self.entries.iter().map(|(answer, code)| (*answer, *code))
    }
}

/// Age bracket. Unlisted brackets fall back to the configured age default.
pub static AGE_TABLE: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(
        "age",
        &[
            ("17 – 21 years", 1),
            ("22 – 30 years", 2),
            ("31 – 40 years", 3),
            ("41 – 50 years", 4),
        ],
    )
});

pub static GENDER_TABLE: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(
        "gender",
        &[
            ("I am a man.", 1),
            ("I am a woman.", 2),
            ("Prefer not to say", 0),
            ("I am non-binary / genderqueer / third gender.", 0),
        ],
    )
});

/// "Is this job an entry level job?" - `Yes` (0) ranks below `No` (1).
pub static ENTRY_LEVEL_TABLE: Lazy<LookupTable> =
    Lazy::new(|| LookupTable::new("entry level", &[("Yes", 0), ("No", 1)]));

/// Annual salary bracket.
pub static SALARY_TABLE: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(
        "salary",
        &[
            ("Under 20000", 1),
            ("20000 to 40000", 2),
            ("40001 to 60000", 3),
            ("60001 to 80000", 4),
            ("80001 to 100000", 5),
            ("100001 to 120000", 6),
            ("Over 120000", 7),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_table_uses_en_dash_brackets() {
        assert_eq!(AGE_TABLE.get("22 – 30 years"), Some(CategoryCode::new(2)));
        assert_eq!(AGE_TABLE.get("22 - 30 years"), None);
        assert_eq!(AGE_TABLE.len(), 4);
    }

    #[test]
    fn gender_table_maps_undisclosed_to_zero() {
        assert_eq!(GENDER_TABLE.get("I am a man."), Some(CategoryCode::new(1)));
        assert_eq!(GENDER_TABLE.get("I am a woman."), Some(CategoryCode::new(2)));
        assert_eq!(GENDER_TABLE.get("Prefer not to say"), Some(CategoryCode::UNKNOWN));
        assert_eq!(
            GENDER_TABLE.get("I am non-binary / genderqueer / third gender."),
            Some(CategoryCode::UNKNOWN)
        );
    }

    #[test]
    fn entry_level_yes_is_zero() {
        assert_eq!(ENTRY_LEVEL_TABLE.get("Yes"), Some(CategoryCode::new(0)));
        assert_eq!(ENTRY_LEVEL_TABLE.get("No"), Some(CategoryCode::new(1)));
        assert_eq!(ENTRY_LEVEL_TABLE.get("yes"), None);
    }

    #[test]
    fn salary_table_has_seven_ordered_brackets() {
        assert_eq!(SALARY_TABLE.len(), 7);
        assert_eq!(SALARY_TABLE.get("Under 20000"), Some(CategoryCode::new(1)));
        assert_eq!(SALARY_TABLE.get("Over 120000"), Some(CategoryCode::new(7)));
        let mut codes: Vec<u8> = SALARY_TABLE.iter().map(|(_, c)| c.value()).collect();
        codes.sort_unstable();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
