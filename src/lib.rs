pub mod batch;
pub mod charts;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rename;
pub mod theme;
pub mod trend;
pub mod types;
pub mod utils;

pub use batch::{BatchPlotter, BatchReport, OutputPaths, RenderedTable};
pub use config::{ChartStyle, PlotConfig, ThemeVariant};
pub use error::{PlotError, RowError};
pub use rename::{rename_extension, Renamed};
pub use trend::{Direction, TrendLine};
