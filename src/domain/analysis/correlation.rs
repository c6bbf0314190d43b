//! Correlation Analyzer - Pearson and Spearman coefficients with two-sided p-values.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::warn;

use crate::domain::foundation::AnalysisError;

use super::AggregationMap;

/// A correlation coefficient and its two-sided p-value.
///
/// Both are NaN when the coefficient is undefined (constant input).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    pub coefficient: f64,
    pub p_value: f64,
}

impl Correlation {
    fn undefined() -> Self {
        Self {
            coefficient: f64::NAN,
            p_value: f64::NAN,
        }
    }

    /// Returns false if the coefficient could not be computed.
    pub fn is_defined(&self) -> bool {
        !self.coefficient.is_nan()
    }
}

/// Pearson and Spearman results for one variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationSummary {
    pub pearson: Correlation,
    pub spearman: Correlation,
}

/// Correlation functions over `(category code, mean satisfaction)` pairs.
pub struct CorrelationAnalyzer;

impl CorrelationAnalyzer {
    /// Minimum number of points for a coefficient.
    pub const MIN_POINTS: usize = 2;

    /// Correlates the categories of an aggregation map with their means.
    ///
    /// # Errors
    ///
    /// `AnalysisError::InsufficientData` if the map has fewer than two categories.
    pub fn summarize(map: &AggregationMap) -> Result<CorrelationSummary, AnalysisError> {
        if map.len() < Self::MIN_POINTS {
            return Err(AnalysisError::insufficient_data(
                map.variable().name(),
                map.len(),
                Self::MIN_POINTS,
            ));
        }

        let (codes, means): (Vec<f64>, Vec<f64>) = map.points().into_iter().unzip();
        let summary = CorrelationSummary {
            pearson: Self::pearson(&codes, &means)?,
            spearman: Self::spearman(&codes, &means)?,
        };

        if !summary.pearson.is_defined() {
            warn!(
                variable = %map.variable(),
                "Category means are constant, correlation is undefined"
            );
        }

        Ok(summary)
    }

    /// Pearson product-moment correlation.
    ///
    /// # Edge Cases
    /// - Two points: p-value is 1
    /// - Perfect correlation with more than two points: p-value is 0
    /// - Constant input: coefficient and p-value are NaN
    pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<Correlation, AnalysisError> {
        Self::check_lengths(xs, ys)?;

        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        if sxx == 0.0 || syy == 0.0 {
            return Ok(Correlation::undefined());
        }

        let coefficient = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
        Ok(Correlation {
            coefficient,
            p_value: Self::two_sided_p_value(coefficient, xs.len())?,
        })
    }

    /// Spearman rank correlation: Pearson over average ranks.
    pub fn spearman(xs: &[f64], ys: &[f64]) -> Result<Correlation, AnalysisError> {
        Self::check_lengths(xs, ys)?;
        Self::pearson(&Self::rank(xs), &Self::rank(ys))
    }

    /// Ranks values from 1, giving tied values the mean of their ranks.
    pub fn rank(values: &[f64]) -> Vec<f64> {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

        let mut ranks = vec![0.0; values.len()];
        let mut start = 0;
        while start < order.len() {
            let mut end = start + 1;
            while end < order.len() && values[order[end]] == values[order[start]] {
                end += 1;
            }
            // Positions start..end share ranks start+1..=end.
            let shared = (start + 1 + end) as f64 / 2.0;
            for &index in &order[start..end] {
                ranks[index] = shared;
            }
            start = end;
        }
        ranks
    }

    fn check_lengths(xs: &[f64], ys: &[f64]) -> Result<(), AnalysisError> {
        if xs.len() != ys.len() {
            return Err(AnalysisError::statistics(format!(
                "sample lengths differ ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < Self::MIN_POINTS {
            return Err(AnalysisError::insufficient_data(
                "sample",
                xs.len(),
                Self::MIN_POINTS,
            ));
        }
        Ok(())
    }

    /// Two-sided p-value of `r` under Student's t with `n - 2` degrees of freedom.
    fn two_sided_p_value(r: f64, n: usize) -> Result<f64, AnalysisError> {
        if n <= 2 {
            return Ok(1.0);
        }
        if r.abs() >= 1.0 {
            return Ok(0.0);
        }

        let df = (n - 2) as f64;
        let t = r * (df / (1.0 - r * r)).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| AnalysisError::statistics(e.to_string()))?;

        Ok((2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn perfect_positive_line() {
        let c = CorrelationAnalyzer::pearson(&[1.0, 2.0, 3.0], &[0.5, 1.0, 1.5]).unwrap();
        assert!((c.coefficient - 1.0).abs() < EPSILON);
        assert_eq!(c.p_value, 0.0);
    }

    #[test]
    fn perfect_negative_line() {
        let c = CorrelationAnalyzer::pearson(&[0.0, 1.0, 2.0, 3.0], &[2.0, 1.5, 1.0, 0.5]).unwrap();
        assert!((c.coefficient + 1.0).abs() < EPSILON);
    }

    #[test]
    fn two_points_have_unit_p_value() {
        let c = CorrelationAnalyzer::pearson(&[0.0, 1.0], &[0.2, 0.9]).unwrap();
        assert!((c.coefficient - 1.0).abs() < EPSILON);
        assert_eq!(c.p_value, 1.0);
    }

    #[test]
    fn pearson_matches_hand_computation() {
        // r = 3.5 / sqrt(5 * 4.75); with df = 2 the two-sided p-value is 1 - |r|.
        let c = CorrelationAnalyzer::pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 5.0, 4.0]).unwrap();
        let expected = 3.5 / (5.0_f64 * 4.75).sqrt();
        assert!((c.coefficient - expected).abs() < EPSILON);
        assert!((c.p_value - (1.0 - expected)).abs() < 1e-6);
    }

    #[test]
    fn constant_input_is_undefined() {
        let c = CorrelationAnalyzer::pearson(&[1.0, 2.0, 3.0], &[0.5, 0.5, 0.5]).unwrap();
        assert!(!c.is_defined());
        assert!(c.p_value.is_nan());
    }

    #[test]
    fn too_few_points_is_error() {
        assert!(matches!(
            CorrelationAnalyzer::pearson(&[1.0], &[1.0]),
            Err(AnalysisError::InsufficientData { points: 1, .. })
        ));
    }

    #[test]
    fn mismatched_lengths_is_error() {
        assert!(matches!(
            CorrelationAnalyzer::pearson(&[1.0, 2.0], &[1.0]),
            Err(AnalysisError::Statistics { .. })
        ));
    }

    #[test]
    fn rank_averages_ties() {
        assert_eq!(
            CorrelationAnalyzer::rank(&[10.0, 20.0, 20.0, 5.0]),
            vec![2.0, 3.5, 3.5, 1.0]
        );
    }

    #[test]
    fn spearman_is_one_for_monotonic_curve() {
        let c = CorrelationAnalyzer::spearman(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0]).unwrap();
        assert!((c.coefficient - 1.0).abs() < EPSILON);
    }

    #[test]
    fn spearman_on_swapped_pair() {
        let c = CorrelationAnalyzer::spearman(&[1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 2.0, 4.0]).unwrap();
        assert!((c.coefficient - 0.8).abs() < EPSILON);
        assert!((c.p_value - 0.2).abs() < 1e-6);
    }
}
