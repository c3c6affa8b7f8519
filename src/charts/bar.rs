//! Bar Chart Renderer
//! One bar per age group with its percentage printed above it.

use super::{y_grid_values, ChartError, CANVAS_SIZE, GRID_GRAY, STEEL_BLUE, Y_LABELS};
use crate::data::AgeDistribution;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Headroom above the tallest bar, in percentage points.
const Y_HEADROOM: f64 = 5.0;
/// Gap between a bar top and its label, in percentage points.
const LABEL_OFFSET: f64 = 0.5;
/// Horizontal pixels left empty on each side of a bar.
const BAR_MARGIN: u32 = 15;

/// A single bar and its annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub annotation: String,
    pub annotation_y: f64,
}

/// Everything needed to draw the bar chart, independent of the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub bars: Vec<Bar>,
    pub y_max: f64,
}

impl BarChartLayout {
    pub fn from_distribution(dist: &AgeDistribution) -> Self {
        let bars = dist
            .groups()
            .iter()
            .map(|g| Bar {
                label: g.label.clone(),
                value: g.percentage,
                annotation: format!("{:.1}%", g.percentage),
                annotation_y: g.percentage + LABEL_OFFSET,
            })
            .collect();

        Self {
            bars,
            y_max: dist.max_percentage() + Y_HEADROOM,
        }
    }
}

pub struct BarChartRenderer;

fn right_edge(idx: usize, n: usize) -> SegmentValue<usize> {
    if idx + 1 < n {
        SegmentValue::Exact(idx + 1)
    } else {
        SegmentValue::Last
    }
}

impl BarChartRenderer {
    /// Render the bar chart to a PNG at `path`, overwriting it.
    pub fn render_to_file(
        path: &Path,
        dist: &AgeDistribution,
        subject: &str,
    ) -> Result<(), ChartError> {
        let layout = BarChartLayout::from_distribution(dist);
        let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
        Self::draw(&root, &layout, &format!("Age Distribution in {}", subject))?;
        root.present()?;
        Ok(())
    }

    /// Draw the layout onto any plotters drawing area.
    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        layout: &BarChartLayout,
        title: &str,
    ) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let n = layout.bars.len();
        // A discrete 0..k axis holds k + 1 segments, one per bar here
        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((0..n.saturating_sub(1)).into_segmented(), 0.0..layout.y_max)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(n)
            .y_labels(Y_LABELS)
            .x_label_formatter(&|x| match x {
                SegmentValue::CenterOf(idx) if *idx < n => layout.bars[*idx].label.clone(),
                _ => String::new(),
            })
            .x_desc("Age Group")
            .y_desc("Percentage of Population (%)")
            .label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 18))
            .draw()?;

        for y in y_grid_values(layout.y_max) {
            chart.draw_series(DashedLineSeries::new(
                vec![(SegmentValue::Exact(0), y), (SegmentValue::Last, y)],
                6,
                4,
                GRID_GRAY.stroke_width(1),
            ))?;
        }

        chart.draw_series(layout.bars.iter().enumerate().map(|(idx, bar)| {
            let mut rect = Rectangle::new(
                [
                    (SegmentValue::Exact(idx), 0.0),
                    (right_edge(idx, n), bar.value),
                ],
                STEEL_BLUE.filled(),
            );
            rect.set_margin(0, 0, BAR_MARGIN, BAR_MARGIN);
            rect
        }))?;

        let label_style = TextStyle::from(("sans-serif", 16).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(layout.bars.iter().enumerate().map(|(idx, bar)| {
            Text::new(
                bar.annotation.clone(),
                (SegmentValue::CenterOf(idx), bar.annotation_y),
                label_style.clone(),
            )
        }))?;

        Ok(())
    }
}
