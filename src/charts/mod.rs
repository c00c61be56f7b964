pub mod bitmap;
pub mod epoch;
mod utils;

use std::path::Path;

use plotters::style::RGBColor;

use crate::{error::Result, types::Points};

pub use bitmap::BitmapRenderer;
pub use epoch::{cycles_spent_chart, max_weight_chart};
pub use utils::{epoch_range, padded_range};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStroke {
    Solid,
    Dashed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Series without a label are left out of the legend
    pub label: Option<String>,
    pub points: Points,
    pub color: RGBColor,
    pub stroke: LineStroke,
    pub width: u32,
}

/// Backend independent description of an x/y line chart
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Boxed note drawn in the upper left corner of the plotting area
    pub annotation: Option<String>,
}

impl LineChart {
    pub fn has_legend(&self) -> bool {
        self.series.iter().any(|series| series.label.is_some())
    }
}

/// Turns a chart description into an image file. Implementations overwrite
/// whatever is already at `path`.
pub trait ChartRenderer {
    fn render(&self, chart: &LineChart, path: &Path) -> Result<()>;
}
