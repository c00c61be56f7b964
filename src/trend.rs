use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// Only a strictly positive slope counts as increasing, so a flat trend
    /// is reported as decreasing.
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Direction::Increasing
        } else {
            Direction::Decreasing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Increasing => "Increasing",
            Direction::Decreasing => "Decreasing",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Least squares line `y = slope * x + intercept`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub direction: Direction,
}

impl TrendLine {
    /// Fits a degree one polynomial to the samples.
    ///
    /// Values are centred on their means before accumulating, which keeps
    /// large epoch numbers from swamping the cross products. When every x is
    /// identical there is no defined slope; the line is then flat through the
    /// mean of y.
    ///
    /// Returns `None` if there are no samples or the lengths differ.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.is_empty() || xs.len() != ys.len() {
            return None;
        }

        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        let mut covariance = 0.0;
        let mut x_variance = 0.0;

        for (x, y) in xs.iter().zip(ys) {
            let dx = x - x_mean;
            covariance += dx * (y - y_mean);
            x_variance += dx * dx;
        }

        let slope = if x_variance == 0.0 {
            0.0
        } else {
            covariance / x_variance
        };

        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
            direction: Direction::from_slope(slope),
        })
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Legend entry for the fitted series, e.g. `Trend (Increasing)`
    pub fn label(&self) -> String {
        format!("Trend ({})", self.direction)
    }

    /// Slope rounded to two decimals, e.g. `Slope: -3.25`
    pub fn annotation(&self) -> String {
        format!("Slope: {:.2}", self.slope)
    }
}
