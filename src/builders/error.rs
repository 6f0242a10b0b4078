//! Error types for the builder API.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building a table.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// A column name was used more than once.
    DuplicateColumn(String),
    /// A column's length differs from the columns before it.
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Row count established by the preceding columns.
        expected: usize,
        /// The offending column's row count.
        actual: usize,
    },
    /// A column value of a kind that cannot frame as a column.
    InvalidColumn {
        /// Name of the offending column.
        column: String,
        /// The kind that was provided.
        kind: &'static str,
    },
    /// A table must have at least one column.
    NoColumns,
    /// Key and data tables of a keyed table disagree on row count.
    KeyRowMismatch {
        /// Row count of the key columns.
        keys: usize,
        /// Row count of the data columns.
        values: usize,
    },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::DuplicateColumn(column) => {
                write!(f, "Column '{}' is defined more than once", column)
            }
            BuilderError::ColumnLengthMismatch {
                column,
                expected,
                actual,
            } => write!(
                f,
                "Column '{}' has {} rows, expected {}",
                column, actual, expected
            ),
            BuilderError::InvalidColumn { column, kind } => {
                write!(f, "Column '{}' of kind {} cannot frame as a column", column, kind)
            }
            BuilderError::NoColumns => write!(f, "A table needs at least one column"),
            BuilderError::KeyRowMismatch { keys, values } => write!(
                f,
                "Key columns have {} rows, data columns have {}",
                keys, values
            ),
        }
    }
}

impl Error for BuilderError {}

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;
