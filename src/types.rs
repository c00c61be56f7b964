/// A list of (x, y) pairs in drawing order
pub type Points = Vec<(f64, f64)>;

/// A list of values, where the last index is the most recent epoch
pub type Data = Vec<f64>;
