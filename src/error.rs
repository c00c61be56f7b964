use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no `{suffix}` data file found in {}", dir.display())]
    NotFound { dir: PathBuf, suffix: String },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: RowError,
    },

    #[error("{} contains no records", path.display())]
    EmptyTable { path: PathBuf },

    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },

    #[error("invalid file suffix {0:?}")]
    InvalidSuffix(String),
}

/// Why a result table row was rejected
#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {field} is not a finite number")]
    NonFinite { line: u64, field: &'static str },
}

impl PlotError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
