//! Error types for trigtab-core.

use thiserror::Error;

/// Core error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Filter string could not be parsed.
    #[error("Invalid filter: {0}")]
    Filter(String),

    /// Name is not a valid SQL identifier.
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Row has the wrong number of cells for the table.
    #[error("Row {row} has {got} cells, expected {expected}")]
    RowWidth {
        /// Index of the offending row.
        row: usize,
        /// Number of cells found.
        got: usize,
        /// Number of columns in the table.
        expected: usize,
    },

    /// Column name appears more than once.
    #[error("Duplicate column: {0:?}")]
    DuplicateColumn(String),

    /// Column does not exist in the table.
    #[error("No column named {0:?}")]
    UnknownColumn(String),

    /// Cell could not be read as a number.
    #[error("Column {column:?} is not numeric at row {row}")]
    NonNumericCell {
        /// Name of the column being read.
        column: String,
        /// Index of the offending row.
        row: usize,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Filter("dangling operator".to_string());
        assert_eq!(err.to_string(), "Invalid filter: dangling operator");
    }

    #[test]
    fn test_row_width_display() {
        let err = Error::RowWidth {
            row: 3,
            got: 2,
            expected: 4,
        };
        assert_eq!(err.to_string(), "Row 3 has 2 cells, expected 4");
    }
}
