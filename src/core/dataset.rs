use serde::{Deserialize, Serialize};

use crate::core::Field;
use crate::error::{ChartError, ChartResult};

/// One census row: display identity plus the six selectable numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub obesity: f64,
    pub smokes: f64,
}

impl Record {
    #[must_use]
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Poverty => self.poverty,
            Field::Age => self.age,
            Field::Income => self.income,
            Field::Healthcare => self.healthcare,
            Field::Obesity => self.obesity,
            Field::Smokes => self.smokes,
        }
    }
}

/// Ordered, non-empty, read-only collection of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validates and wraps records.
    ///
    /// Rejects empty input and any non-finite numeric field so NaN never
    /// reaches domain or scale computations.
    pub fn new(records: Vec<Record>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        for (index, record) in records.iter().enumerate() {
            for field in Field::ALL {
                let value = record.value(field);
                if !value.is_finite() {
                    return Err(ChartError::InvalidField {
                        row: index + 1,
                        field,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn values(&self, field: Field) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |record| record.value(field))
    }
}
