use std::{io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::{
    error::{PlotError, Result, RowError},
    types::{Data, Points},
};

const FIELDS: usize = 3;

/// One line of a colony result file: `epoch,max_weight,cycles_spent`
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Record {
    pub epoch: i64,
    pub max_weight: f64,
    pub cycles_spent: f64,
}

/// The records of a single run, in file order. Epochs are assumed to be
/// ascending but this is never checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    pub records: Vec<Record>,
}

impl ResultTable {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| PlotError::io(path, source))?;
        let table = Self::from_reader(file).map_err(|source| PlotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if table.is_empty() {
            return Err(PlotError::EmptyTable {
                path: path.to_path_buf(),
            });
        }

        Ok(table)
    }

    /// Parses headerless comma separated records. Blank lines are skipped.
    /// Every row must hold exactly three fields and the metrics must be
    /// finite.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RowError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();

        for row in reader.records() {
            let row = row?;
            let line = row.position().map(|position| position.line()).unwrap_or_default();

            if row.len() != FIELDS {
                return Err(RowError::FieldCount {
                    line,
                    expected: FIELDS,
                    found: row.len(),
                });
            }

            let record: Record = row.deserialize(None)?;
            if !record.max_weight.is_finite() {
                return Err(RowError::NonFinite {
                    line,
                    field: "max_weight",
                });
            }
            if !record.cycles_spent.is_finite() {
                return Err(RowError::NonFinite {
                    line,
                    field: "cycles_spent",
                });
            }

            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn epochs(&self) -> Data {
        self.records.iter().map(|record| record.epoch as f64).collect()
    }

    pub fn cycles_spent(&self) -> Data {
        self.records.iter().map(|record| record.cycles_spent).collect()
    }

    pub fn max_weight_points(&self) -> Points {
        self.records
            .iter()
            .map(|record| (record.epoch as f64, record.max_weight))
            .collect()
    }

    pub fn cycles_spent_points(&self) -> Points {
        self.records
            .iter()
            .map(|record| (record.epoch as f64, record.cycles_spent))
            .collect()
    }
}
