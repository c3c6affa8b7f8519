//! Histogram Renderer
//! Draws the binned age sample as adjacent bars with black edges.

use super::{y_grid_values, ChartError, CANVAS_SIZE, GRID_GRAY, STEEL_BLUE, Y_LABELS};
use crate::stats::Histogram;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub struct HistogramRenderer;

impl HistogramRenderer {
    /// Render `hist` to a PNG at `path`, overwriting it.
    pub fn render_to_file(path: &Path, hist: &Histogram, subject: &str) -> Result<(), ChartError> {
        let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
        Self::draw(
            &root,
            hist,
            &format!("Age Distribution Histogram of {}", subject),
        )?;
        root.present()?;
        Ok(())
    }

    /// Upper bound of the frequency axis.
    pub fn y_max(hist: &Histogram) -> f64 {
        (hist.max_count() as f64 * 1.05).max(1.0)
    }

    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        hist: &Histogram,
        title: &str,
    ) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let y_max = Self::y_max(hist);
        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(hist.min..hist.max, 0.0..y_max)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Age")
            .y_desc("Frequency")
            .y_labels(Y_LABELS)
            .y_label_formatter(&|y| format!("{:.0}", y))
            .label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 18))
            .draw()?;

        for y in y_grid_values(y_max) {
            chart.draw_series(DashedLineSeries::new(
                vec![(hist.min, y), (hist.max, y)],
                6,
                4,
                GRID_GRAY.stroke_width(1),
            ))?;
        }

        let edges = hist.edges();
        let bins = || {
            hist.counts
                .iter()
                .enumerate()
                .map(|(i, &count)| [(edges[i], 0.0), (edges[i + 1], count as f64)])
        };

        chart.draw_series(bins().map(|corners| Rectangle::new(corners, STEEL_BLUE.mix(0.7).filled())))?;
        chart.draw_series(bins().map(|corners| Rectangle::new(corners, BLACK.stroke_width(1))))?;

        Ok(())
    }
}
