use thiserror::Error;

use crate::core::{Axis, Field};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset must contain at least one record")]
    EmptyDataset,

    #[error("row {row}: field `{field}` has non-numeric value `{value}`")]
    InvalidField {
        row: usize,
        field: Field,
        value: String,
    },

    #[error("unknown {axis} label `{name}`")]
    UnknownLabel { axis: Axis, name: String },

    #[error("field `{field}` cannot drive the {axis} axis")]
    FieldAxisMismatch { field: Field, axis: Axis },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
