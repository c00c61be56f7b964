use std::ops::Range;

use plotters::{element::Rectangle, style::Color};

/// Value range of the finite inputs, widened by `padding` of its span on each
/// side. A flat input still gets a visible band around it.
pub fn padded_range(values: impl IntoIterator<Item = f64>, padding: f64) -> Option<Range<f64>> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((min, max)) => Some((min.min(v), max.max(v))),
            None => Some((v, v)),
        })?;

    let span = (max - min).max(0.01);
    Some(min - span * padding..max + span * padding)
}

/// Epoch axis range. Epochs are whole numbers, so a single epoch is widened
/// by one in each direction rather than by a fraction.
pub fn epoch_range(values: impl IntoIterator<Item = f64>) -> Option<Range<f64>> {
    let range = padded_range(values, 0.0)?;
    if range.end - range.start <= 0.01 {
        let center = (range.start + range.end) / 2.0;
        return Some(center - 1.0..center + 1.0);
    }
    Some(range)
}

pub fn legend_rect<C: Color>(color: C) -> impl Fn((i32, i32)) -> Rectangle<(i32, i32)> {
    move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.mix(0.8).filled())
}
