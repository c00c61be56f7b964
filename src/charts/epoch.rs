use crate::{
    config::ChartStyle,
    constants::charts::{
        ACTUAL_CYCLES_LABEL, CYCLES_SPENT_LABEL, CYCLES_SPENT_TITLE, EPOCH_LABEL,
        MAX_WEIGHT_LABEL, MAX_WEIGHT_TITLE,
    },
    data::ResultTable,
    trend::TrendLine,
};

use super::{LineChart, LineStroke, Series};

pub fn max_weight_chart(table: &ResultTable, style: &ChartStyle) -> LineChart {
    LineChart {
        title: MAX_WEIGHT_TITLE.to_string(),
        x_label: EPOCH_LABEL.to_string(),
        y_label: MAX_WEIGHT_LABEL.to_string(),
        series: vec![Series {
            label: None,
            points: table.max_weight_points(),
            color: style.max_weight,
            stroke: LineStroke::Solid,
            width: style.line_width,
        }],
        annotation: None,
    }
}

/// Cycles spent per epoch with the fitted trend evaluated at every epoch
pub fn cycles_spent_chart(table: &ResultTable, trend: &TrendLine, style: &ChartStyle) -> LineChart {
    let fitted = table
        .epochs()
        .into_iter()
        .map(|epoch| (epoch, trend.evaluate(epoch)))
        .collect();

    LineChart {
        title: CYCLES_SPENT_TITLE.to_string(),
        x_label: EPOCH_LABEL.to_string(),
        y_label: CYCLES_SPENT_LABEL.to_string(),
        series: vec![
            Series {
                label: Some(ACTUAL_CYCLES_LABEL.to_string()),
                points: table.cycles_spent_points(),
                color: style.cycles_spent,
                stroke: LineStroke::Solid,
                width: style.line_width,
            },
            Series {
                label: Some(trend.label()),
                points: fitted,
                color: style.trend,
                stroke: LineStroke::Dashed,
                width: style.trend_width,
            },
        ],
        annotation: Some(trend.annotation()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn table(rows: &[(i64, f64, f64)]) -> ResultTable {
        ResultTable {
            records: rows
                .iter()
                .map(|&(epoch, max_weight, cycles_spent)| Record {
                    epoch,
                    max_weight,
                    cycles_spent,
                })
                .collect(),
        }
    }

    #[test]
    fn test_max_weight_chart() {
        let table = table(&[(0, 5.0, 10.0), (1, 6.0, 20.0)]);
        let chart = max_weight_chart(&table, &ChartStyle::light());

        assert_eq!(chart.title, "Epoch vs. Max Weight");
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].points, vec![(0.0, 5.0), (1.0, 6.0)]);
        assert!(!chart.has_legend());
        assert!(chart.annotation.is_none());
    }

    #[test]
    fn test_cycles_chart_overlays_trend() {
        let table = table(&[(0, 5.0, 10.0), (1, 5.0, 20.0), (2, 5.0, 30.0)]);
        let trend = TrendLine::fit(&table.epochs(), &table.cycles_spent()).unwrap();
        let style = ChartStyle::light();
        let chart = cycles_spent_chart(&table, &trend, &style);

        assert_eq!(chart.series.len(), 2);
        let fitted = &chart.series[1];
        assert_eq!(fitted.label.as_deref(), Some("Trend (Increasing)"));
        assert_eq!(fitted.stroke, LineStroke::Dashed);
        assert_eq!(fitted.color, style.trend);
        for ((x, y), (fx, fy)) in chart.series[0].points.iter().zip(&fitted.points) {
            assert_eq!(x, fx);
            assert!((y - fy).abs() < 1e-9);
        }
        assert_eq!(chart.annotation.as_deref(), Some("Slope: 10.00"));
    }
}
