//! The seven analysed survey variables and their presentation metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A demographic or job variable whose categories are compared on satisfaction.
///
/// Declaration order is the fixed analysis order; figure numbers, titles and
/// axis labels are chosen by that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Age,
    Gender,
    Degree,
    EntryLevel,
    Salary,
    CompanyMatch,
    PositionMatch,
}

const MATCH_TICKS: &[(u8, &str)] = &[(0, "Other"), (1, "Mismatch"), (2, "Match")];

impl Variable {
    /// All variables in analysis order.
    pub const ALL: [Variable; 7] = [
        Variable::Age,
        Variable::Gender,
        Variable::Degree,
        Variable::EntryLevel,
        Variable::Salary,
        Variable::CompanyMatch,
        Variable::PositionMatch,
    ];

    /// Returns the 1-based figure number.
    pub fn figure_number(&self) -> usize {
        match self {
            Variable::Age => 1,
            Variable::Gender => 2,
            Variable::Degree => 3,
            Variable::EntryLevel => 4,
            Variable::Salary => 5,
            Variable::CompanyMatch => 6,
            Variable::PositionMatch => 7,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Age => "Age",
            Variable::Gender => "Gender",
            Variable::Degree => "Degree",
            Variable::EntryLevel => "Job Level",
            Variable::Salary => "Salary",
            Variable::CompanyMatch => "Company Scale Match",
            Variable::PositionMatch => "Position Match",
        }
    }

    /// Returns a filesystem-safe identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            Variable::Age => "age",
            Variable::Gender => "gender",
            Variable::Degree => "degree",
            Variable::EntryLevel => "entry_level",
            Variable::Salary => "salary",
            Variable::CompanyMatch => "company_match",
            Variable::PositionMatch => "position_match",
        }
    }

    pub fn figure_title(&self) -> &'static str {
        match self {
            Variable::Age => "Figure 1: Age and Job Satisfaction",
            Variable::Gender => "Figure 2: Gender and Job Satisfaction",
            Variable::Degree => "Figure 3: Degree and Job Satisfaction",
            Variable::EntryLevel => "Figure 4: Job Level and Satisfaction",
            Variable::Salary => "Figure 5: Annual Salary and Satisfaction",
            Variable::CompanyMatch => "Figure 6: Match of Company Scale and Satisfaction",
            Variable::PositionMatch => "Figure 7: Match of Position and Satisfaction",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Variable::Age => "Age",
            Variable::Gender => "Gender",
            Variable::Degree => "Degree",
            Variable::EntryLevel => "Job Level",
            Variable::Salary => "Salary",
            Variable::CompanyMatch => "Match of Company Scale",
            Variable::PositionMatch => "Match of Job Position",
        }
    }

    /// Returns the x axis ticks as `(code, category label)` pairs.
    pub fn tick_labels(&self) -> &'static [(u8, &'static str)] {
        match self {
            Variable::Age => &[
                (1, "17 – 21 years"),
                (2, "22 – 30 years"),
                (3, "31 – 40 years"),
                (4, "41 – 50 years"),
            ],
            Variable::Gender => &[(0, "Other"), (1, "Male"), (2, "Female")],
            Variable::Degree => &[
                (0, "Diploma"),
                (1, "Associate"),
                (2, "Bachelor"),
                (3, "Master"),
                (4, "PhD"),
            ],
            Variable::EntryLevel => &[(0, "Entry Level"), (1, "Not Entry Level")],
            Variable::Salary => &[
                (0, "N/A"),
                (1, "Under 20k"),
                (2, "20k to 40k"),
                (3, "40k to 60k"),
                (4, "60k to 80k"),
                (5, "80k to 100k"),
                (6, "100k to 120k"),
                (7, "Over 120k"),
            ],
            Variable::CompanyMatch | Variable::PositionMatch => MATCH_TICKS,
        }
    }

    /// Returns the category name for a code, if the code has a tick label.
    pub fn category_label(&self, code: u8) -> Option<&'static str> {
        self.tick_labels()
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Returns true for the preference-versus-actual match variables.
    pub fn is_match(&self) -> bool {
        matches!(self, Variable::CompanyMatch | Variable::PositionMatch)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
