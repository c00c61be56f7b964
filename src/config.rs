use clap::ValueEnum;
use plotters::style::RGBColor;

use crate::{
    constants::{charts, files},
    theme,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ThemeVariant {
    #[default]
    Light,
    Mocha,
}

impl ThemeVariant {
    pub fn style(self) -> ChartStyle {
        match self {
            ThemeVariant::Light => ChartStyle::light(),
            ThemeVariant::Mocha => ChartStyle::mocha(),
        }
    }
}

/// Everything cosmetic about a chart. Colours are per series so both charts
/// of a table can be told apart at a glance.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    pub dimensions: (u32, u32),
    pub font: &'static str,
    pub caption_size: u32,
    pub label_size: u32,
    pub background: RGBColor,
    pub text: RGBColor,
    pub axis: RGBColor,
    pub grid: RGBColor,
    pub max_weight: RGBColor,
    pub cycles_spent: RGBColor,
    pub trend: RGBColor,
    pub line_width: u32,
    pub trend_width: u32,
}

impl ChartStyle {
    pub fn light() -> Self {
        Self {
            dimensions: charts::CHART_DIMS,
            font: charts::FONT,
            caption_size: 20,
            label_size: 15,
            background: theme::light::BASE,
            text: theme::light::TEXT,
            axis: theme::light::AXIS,
            grid: theme::light::GRID,
            max_weight: theme::light::BLUE,
            cycles_spent: theme::light::RED,
            trend: theme::light::BLUE,
            line_width: 1,
            trend_width: 2,
        }
    }

    pub fn mocha() -> Self {
        Self {
            background: theme::mocha::BASE,
            text: theme::mocha::TEXT,
            axis: theme::mocha::SURFACE1,
            grid: theme::mocha::SURFACE0,
            max_weight: theme::mocha::BLUE,
            cycles_spent: theme::mocha::RED,
            trend: theme::mocha::YELLOW,
            ..Self::light()
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::light()
    }
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Files whose name ends with this are treated as result tables
    pub data_suffix: String,
    pub plots_dir: String,
    /// Extension of the written images, which also selects the encoder
    pub image_format: String,
    /// Stop the batch at the first table that fails instead of skipping it
    pub fail_fast: bool,
    pub style: ChartStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            data_suffix: files::DATA_SUFFIX.to_string(),
            plots_dir: files::PLOTS_DIR.to_string(),
            image_format: charts::CHART_IMAGE_FORMAT.to_string(),
            fail_fast: false,
            style: ChartStyle::default(),
        }
    }
}
