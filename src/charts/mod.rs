//! Charts module - Static chart rendering with plotters

mod bar;
mod display;
mod histogram;

pub use bar::BarChartRenderer;
pub use display::show;
pub use histogram::HistogramRenderer;

use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::style::RGBColor;
use thiserror::Error;

/// Canvas size in pixels (12 x 8 inches at 100 dpi).
pub const CANVAS_SIZE: (u32, u32) = (1200, 800);

pub const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
pub const GRID_GRAY: RGBColor = RGBColor(190, 190, 190);

/// Label count requested for the y axis; the dashed grid uses the same ticks.
pub const Y_LABELS: usize = 10;

/// Tick values strictly inside `(0, y_max)`, where the mesh draws y labels.
pub fn y_grid_values(y_max: f64) -> Vec<f64> {
    RangedCoordf64::from(0.0..y_max)
        .key_points(Y_LABELS)
        .into_iter()
        .filter(|y| *y > 0.0 && *y < y_max)
        .collect()
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart drawing failed: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}
