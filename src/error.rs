use std::fmt;

use thiserror::Error;

/// Which dimension of the grid an index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[derive(Error, Debug)]
/// Edit session error
pub enum EditError {
    #[error("Decode from: {message}")]
    Decode {
        message: String,
        /// 1-based record number, when the decoder knows it
        record: Option<u64>,
    },

    #[error("Encode from: {0}")]
    Encode(String),

    #[error("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },

    #[error("row {row} has {found} fields, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("an ingest is already in progress")]
    IngestInProgress,

    #[error("invalid options: {0}")]
    Config(String),

    #[error("I/O from: {0}")]
    Io(#[from] std::io::Error),
}

impl EditError {
    pub(crate) fn row_out_of_range(index: usize, len: usize) -> Self {
        EditError::IndexOutOfRange {
            axis: Axis::Row,
            index,
            len,
        }
    }

    pub(crate) fn column_out_of_range(index: usize, len: usize) -> Self {
        EditError::IndexOutOfRange {
            axis: Axis::Column,
            index,
            len,
        }
    }
}
