//! Error types for the thermowave-table crate.

use crate::column::ColumnKind;

/// Error type for all fallible operations in the thermowave-table crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Returned when a column's length differs from the table's row count.
    #[error("column '{name}' has {got} rows, table has {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        name: String,
        /// Row count of the table.
        expected: usize,
        /// Length of the column.
        got: usize,
    },

    /// Returned when two columns share a name at construction time.
    #[error("duplicate column '{name}'")]
    DuplicateColumn {
        /// The repeated name.
        name: String,
    },

    /// Returned when a requested column does not exist.
    #[error("column '{name}' not found")]
    MissingColumn {
        /// Name that was looked up.
        name: String,
    },

    /// Returned when a column exists but holds the wrong kind of values.
    #[error("column '{name}' must be {expected}")]
    ColumnType {
        /// Name of the offending column.
        name: String,
        /// Kind the caller required.
        expected: ColumnKind,
    },

    /// Returned when a column name is empty.
    #[error("column name must not be empty")]
    EmptyColumnName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_length_mismatch() {
        let e = TableError::LengthMismatch {
            name: "tasmax".to_string(),
            expected: 365,
            got: 364,
        };
        assert_eq!(e.to_string(), "column 'tasmax' has 364 rows, table has 365");
    }

    #[test]
    fn error_missing_column() {
        let e = TableError::MissingColumn {
            name: "doy".to_string(),
        };
        assert_eq!(e.to_string(), "column 'doy' not found");
    }

    #[test]
    fn error_column_type() {
        let e = TableError::ColumnType {
            name: "year".to_string(),
            expected: ColumnKind::Int,
        };
        assert_eq!(e.to_string(), "column 'year' must be integer");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<TableError>();
    }
}
