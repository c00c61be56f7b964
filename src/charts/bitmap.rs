use std::{error::Error, path::Path};

use plotters::{
    chart::ChartBuilder,
    element::{Rectangle, Text},
    prelude::{BitMapBackend, IntoDrawingArea, SeriesLabelPosition},
    series::{DashedLineSeries, LineSeries},
    style::{Color, IntoTextStyle, ShapeStyle},
};

use crate::{
    config::ChartStyle,
    constants::charts::Y_PADDING,
    error::{PlotError, Result},
};

use super::{
    utils::{epoch_range, legend_rect, padded_range},
    ChartRenderer, LineChart, LineStroke,
};

/// Draws charts with the plotters bitmap backend. The encoder is picked from
/// the output file extension.
#[derive(Clone, Debug, Default)]
pub struct BitmapRenderer {
    pub style: ChartStyle,
}

impl BitmapRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }
}

impl ChartRenderer for BitmapRenderer {
    fn render(&self, chart: &LineChart, path: &Path) -> Result<()> {
        line_chart(path, chart, &self.style).map_err(|err| PlotError::Render {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

pub fn line_chart(path: &Path, chart: &LineChart, style: &ChartStyle) -> Result<(), Box<dyn Error>> {
    let points = || chart.series.iter().flat_map(|series| series.points.iter());

    let x_range = epoch_range(points().map(|(x, _)| *x)).ok_or("chart has no points")?;
    let y_range = padded_range(points().map(|(_, y)| *y), Y_PADDING).ok_or("chart has no points")?;

    let root = BitMapBackend::new(path, style.dimensions).into_drawing_area();
    root.fill(&style.background)?;

    let mut context = ChartBuilder::on(&root)
        .caption(&chart.title, (style.font, style.caption_size, &style.text))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    context
        .configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .label_style((style.font, style.label_size, &style.text))
        .axis_style(&style.axis)
        .bold_line_style(&style.grid)
        .light_line_style(style.grid.mix(0.4))
        .draw()?;

    for series in &chart.series {
        let line_style = ShapeStyle::from(&series.color).stroke_width(series.width);
        let points = series.points.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite());

        let drawn = match series.stroke {
            LineStroke::Solid => context.draw_series(LineSeries::new(points, line_style))?,
            LineStroke::Dashed => {
                context.draw_series(DashedLineSeries::new(points, 10, 6, line_style))?
            }
        };

        if let Some(label) = &series.label {
            drawn.label(label.as_str()).legend(legend_rect(series.color));
        }
    }

    if chart.has_legend() {
        context
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(style.background.mix(0.8))
            .border_style(&style.axis)
            .label_font((style.font, style.label_size, &style.text))
            .draw()?;
    }

    if let Some(note) = &chart.annotation {
        // Drawn on the root in pixels, 5% in from the plot's top left corner
        let (x_pixels, y_pixels) = context.plotting_area().get_pixel_range();
        let x = x_pixels.start + ((x_pixels.end - x_pixels.start) as f64 * 0.05) as i32;
        let y = y_pixels.start + ((y_pixels.end - y_pixels.start) as f64 * 0.05) as i32;

        let font = (style.font, style.label_size, &style.text).into_text_style(&root);
        let (text_width, text_height) = root.estimate_text_size(note, &font)?;
        let corners = [
            (x - 6, y - 4),
            (x + text_width as i32 + 6, y + text_height as i32 + 4),
        ];

        root.draw(&Rectangle::new(corners, style.background.filled()))?;
        root.draw(&Rectangle::new(corners, ShapeStyle::from(&style.axis)))?;
        root.draw(&Text::new(note.as_str(), (x, y), font))?;
    }

    root.present()?;

    Ok(())
}
