//! CSV dataset loading.
//!
//! Rows are read through `csv` + `serde`; numeric columns are parsed
//! explicitly so a bad cell reports its row and field instead of silently
//! becoming NaN.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::core::{Dataset, Field, Record};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(alias = "state")]
    name: String,
    abbr: String,
    poverty: String,
    age: String,
    income: String,
    healthcare: String,
    obesity: String,
    smokes: String,
}

impl RawRecord {
    fn into_record(self, row: usize) -> ChartResult<Record> {
        Ok(Record {
            poverty: parse_numeric(row, Field::Poverty, &self.poverty)?,
            age: parse_numeric(row, Field::Age, &self.age)?,
            income: parse_numeric(row, Field::Income, &self.income)?,
            healthcare: parse_numeric(row, Field::Healthcare, &self.healthcare)?,
            obesity: parse_numeric(row, Field::Obesity, &self.obesity)?,
            smokes: parse_numeric(row, Field::Smokes, &self.smokes)?,
            name: self.name,
            abbr: self.abbr,
        })
    }
}

fn parse_numeric(row: usize, field: Field, raw: &str) -> ChartResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::InvalidField {
            row,
            field,
            value: raw.to_owned(),
        }),
    }
}

/// Loads a dataset from a CSV file with a header row.
pub fn load_csv_path(path: impl AsRef<Path>) -> ChartResult<Dataset> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening dataset");
    let file = File::open(path)?;
    load_csv_reader(file)
}

pub fn load_csv_str(input: &str) -> ChartResult<Dataset> {
    load_csv_reader(input.as_bytes())
}

/// Loads a dataset from any CSV byte source.
///
/// Columns besides name/abbr and the six numeric fields are ignored. Row
/// numbers in errors are 1-based and exclude the header.
pub fn load_csv_reader<R: Read>(source: R) -> ChartResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for (index, raw) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = raw?;
        records.push(raw.into_record(index + 1)?);
    }

    let dataset = Dataset::new(records)?;
    info!(rows = dataset.len(), "dataset loaded");
    Ok(dataset)
}
