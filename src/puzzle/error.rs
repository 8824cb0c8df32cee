use thiserror::Error;

use crate::puzzle::{CellId, Value};

/// Error parsing a grid encoding
#[derive(Debug, Error, PartialEq)]
pub enum ParseGridError {
    #[error("expected 81 cells, found {0}")]
    BadLength(usize),
    #[error("value {value} repeats within a row, column, or box at cell {index}")]
    Conflict { index: CellId, value: Value },
}
