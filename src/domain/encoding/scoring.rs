//! Satisfaction Scorer - per-respondent mean of the Likert satisfaction items.

use tracing::debug;

use crate::domain::foundation::{AnalysisError, LikertResponse, SatisfactionScore};
use crate::domain::survey::Respondent;

/// Number of satisfaction items in the survey; the fixed score denominator.
pub const SATISFACTION_ITEM_COUNT: usize = 5;

/// Computes job-satisfaction scores.
pub struct SatisfactionScorer;

impl SatisfactionScorer {
    /// Scores a sequence of raw answers.
    ///
    /// Every answer matching the Likert wording contributes its value; the sum
    /// is always divided by [`SATISFACTION_ITEM_COUNT`], so a respondent who
    /// answered fewer items is under-weighted rather than rejected.
    pub fn score_values<'a, I>(values: I) -> SatisfactionScore
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (total, _) = Self::tally(values);
        Self::mean(total)
    }

    /// Scores every respondent, appending the score to each record.
    ///
    /// Returns the scores in respondent order.
    ///
    /// # Errors
    ///
    /// `AnalysisError::FieldState` if a respondent was already scored.
    pub fn score(respondents: &mut [Respondent]) -> Result<Vec<SatisfactionScore>, AnalysisError> {
        let mut scores = Vec::with_capacity(respondents.len());

        for respondent in respondents.iter_mut() {
            let (total, answered) = Self::tally(respondent.raw_values());
            if answered < SATISFACTION_ITEM_COUNT {
                debug!(
                    row = respondent.row(),
                    answered,
                    "Fewer satisfaction items than expected, score is under-weighted"
                );
            }

            let score = Self::mean(total);
            respondent.append_satisfaction(score)?;
            scores.push(score);
        }

        Ok(scores)
    }

    fn tally<'a, I>(values: I) -> (i32, usize)
    where
        I: IntoIterator<Item = &'a str>,
    {
        values
            .into_iter()
            .filter_map(LikertResponse::from_label)
            .fold((0, 0), |(total, answered), response| {
                (total + i32::from(response.value()), answered + 1)
            })
    }

    fn mean(total: i32) -> SatisfactionScore {
        SatisfactionScore::new(f64::from(total) / SATISFACTION_ITEM_COUNT as f64)
    }
}
