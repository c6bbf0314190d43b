//! SVG Chart Renderer Adapter
//!
//! Draws one scatter plot per variable: category codes on the x axis with
//! their category names as tick labels, mean satisfaction on a fixed
//! `[0, 2.5]` y axis, each point annotated with its formatted mean, and the
//! least-squares line through the points.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::domain::survey::Variable;
use crate::ports::{ChartRenderer, ChartRequest, RenderError};

const Y_RANGE: (f64, f64) = (0.0, 2.5);
const Y_AXIS_LABEL: &str = "Satisfaction Score";

/// Writes `figure_<n>_<variable>.svg` files into a directory.
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    directory: PathBuf,
    width: u32,
    height: u32,
}

impl SvgChartRenderer {
    pub fn new<P: AsRef<Path>>(directory: P, width: u32, height: u32) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            width,
            height,
        }
    }

    pub fn figure_path(&self, variable: Variable) -> PathBuf {
        self.directory.join(format!(
            "figure_{}_{}.svg",
            variable.figure_number(),
            variable.slug()
        ))
    }

    fn draw(&self, request: &ChartRequest<'_>, path: &Path) -> Result<(), Box<dyn Error>> {
        let ticks = request.variable.tick_labels();
        let points = request.annotated_points();
        let (x_min, x_max) = x_extent(ticks, &points);

        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(request.variable.figure_title(), ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d((x_min - 0.5)..(x_max + 0.5), Y_RANGE.0..Y_RANGE.1)?;

        let label_count = (x_max - x_min).round() as usize + 2;
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(request.variable.axis_label())
            .y_desc(Y_AXIS_LABEL)
            .x_labels(label_count)
            .x_label_formatter(&|x| tick_label(ticks, *x))
            .y_labels(6)
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;

        chart.draw_series(points.iter().map(|&(x, y, mean)| {
            EmptyElement::at((x, y))
                + Circle::new((0, 0), 4, BLACK.filled())
                + Text::new(mean.to_string(), (6, -16), ("sans-serif", 14).into_font())
        }))?;

        if let Some(fit) = request.fit {
            let lo = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
            let hi = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
            chart.draw_series(LineSeries::new(
                [(lo, fit.predict(lo)), (hi, fit.predict(hi))],
                &BLACK,
            ))?;
        }

        root.present()?;
        Ok(())
    }
}

/// Smallest and largest code among the tick labels and the plotted points.
fn x_extent(ticks: &[(u8, &str)], points: &[(f64, f64, &str)]) -> (f64, f64) {
    ticks
        .iter()
        .map(|(code, _)| f64::from(*code))
        .chain(points.iter().map(|p| p.0))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        })
}

/// Category name for an axis position; blank between categories.
fn tick_label(ticks: &[(u8, &str)], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    ticks
        .iter()
        .find(|(code, _)| f64::from(*code) == nearest)
        .map(|(_, label)| label.to_string())
        .unwrap_or_default()
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, request: &ChartRequest<'_>) -> Result<Option<PathBuf>, RenderError> {
        std::fs::create_dir_all(&self.directory).map_err(|e| RenderError::Directory {
            path: self.directory.display().to_string(),
            message: e.to_string(),
        })?;

        let path = self.figure_path(request.variable);
        self.draw(request, &path).map_err(|e| RenderError::Drawing {
            figure: request.variable.figure_number(),
            message: e.to_string(),
        })?;

        info!(variable = %request.variable, path = %path.display(), "Figure written");
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_paths_follow_variable_order() {
        let renderer = SvgChartRenderer::new("figures", 800, 600);
        assert_eq!(
            renderer.figure_path(Variable::Age),
            PathBuf::from("figures/figure_1_age.svg")
        );
        assert_eq!(
            renderer.figure_path(Variable::PositionMatch).file_name().unwrap(),
            format!("figure_7_{}.svg", Variable::PositionMatch.slug()).as_str()
        );
    }

    #[test]
    fn tick_labels_only_on_category_positions() {
        let ticks = Variable::EntryLevel.tick_labels();
        assert_eq!(tick_label(ticks, 0.0), "Entry Level");
        assert_eq!(tick_label(ticks, 1.0), "Not Entry Level");
        assert_eq!(tick_label(ticks, 0.5), "");
        assert_eq!(tick_label(ticks, -1.0), "");
    }

    #[test]
    fn extent_covers_ticks_and_points() {
        let ticks = Variable::Age.tick_labels();
        assert_eq!(x_extent(ticks, &[(0.0, 1.0, "1.00")]), (0.0, 4.0));
    }
}
