//! Least-squares regression line through the category means.

use serde::Serialize;

/// `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fits a degree-1 polynomial by ordinary least squares.
    ///
    /// Returns `None` for fewer than two points or when every x is equal.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
            let dx = x - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });

        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line_is_recovered() {
        let fit = LinearFit::fit(&[(0.0, 1.0), (1.0, 1.5), (2.0, 2.0)]).unwrap();
        assert!((fit.slope - 0.5).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.predict(4.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn noisy_points_minimise_squared_error() {
        let fit = LinearFit::fit(&[(0.0, 0.5), (1.0, 0.5), (2.0, 2.5), (3.0, 2.5)]).unwrap();
        assert!((fit.slope - 0.8).abs() < 1e-12);
        assert!((fit.intercept - 0.3).abs() < 1e-12);
    }

    #[test]
    fn vertical_or_single_point_has_no_fit() {
        assert!(LinearFit::fit(&[(1.0, 0.0), (1.0, 2.0)]).is_none());
        assert!(LinearFit::fit(&[(1.0, 0.0)]).is_none());
    }
}
