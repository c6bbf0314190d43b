//! Encoded code sequence for one variable.

use std::collections::BTreeSet;

use crate::domain::foundation::CategoryCode;
use crate::domain::survey::Variable;

/// Codes an encoder produced, parallel to respondent order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeColumn {
    pub variable: Variable,
    pub codes: Vec<CategoryCode>,
    /// Rows whose answer was not in the lookup table and received the default.
    pub defaults_applied: usize,
}

impl CodeColumn {
    pub fn new(variable: Variable) -> Self {
        Self {
            variable,
            codes: Vec::new(),
            defaults_applied: 0,
        }
    }

    pub fn with_capacity(variable: Variable, capacity: usize) -> Self {
        Self {
            variable,
            codes: Vec::with_capacity(capacity),
            defaults_applied: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the distinct codes in ascending order.
    pub fn distinct_codes(&self) -> BTreeSet<CategoryCode> {
        self.codes.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_codes_are_sorted_and_deduplicated() {
        let mut column = CodeColumn::new(Variable::Age);
        column.codes = vec![3, 1, 3, 2, 1].into_iter().map(CategoryCode::new).collect();

        let distinct: Vec<u8> = column.distinct_codes().iter().map(|c| c.value()).collect();
        assert_eq!(distinct, vec![1, 2, 3]);
        assert_eq!(column.len(), 5);
    }
}
