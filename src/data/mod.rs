pub mod table;

pub use table::{Record, ResultTable};
