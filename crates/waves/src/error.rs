//! Error types for the thermowave-waves crate.

use thermowave_table::{ColumnKind, TableError};

/// Error type for all fallible operations in the thermowave-waves crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveError {
    /// Returned when a column named in the configuration is absent.
    #[error("required column '{name}' not found")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// Returned when a required column holds the wrong kind of values.
    #[error("column '{name}' must be {expected}")]
    ColumnType {
        /// Name of the offending column.
        name: String,
        /// Kind that was required.
        expected: ColumnKind,
    },

    /// Returned when a day appears more than once within a year.
    #[error("duplicate day {day} in year {year}")]
    DuplicateDay {
        /// Year holding the repeated day.
        year: i64,
        /// The repeated day identifier.
        day: i64,
    },

    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps any other error from the table crate.
    #[error("table error: {0}")]
    Table(TableError),
}

impl From<TableError> for WaveError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::MissingColumn { name } => WaveError::MissingColumn { name },
            TableError::ColumnType { name, expected } => WaveError::ColumnType { name, expected },
            other => WaveError::Table(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_column() {
        let e = WaveError::MissingColumn {
            name: "tasmax".to_string(),
        };
        assert_eq!(e.to_string(), "required column 'tasmax' not found");
    }

    #[test]
    fn error_duplicate_day() {
        let e = WaveError::DuplicateDay {
            year: 1998,
            day: 42,
        };
        assert_eq!(e.to_string(), "duplicate day 42 in year 1998");
    }

    #[test]
    fn error_invalid_config() {
        let e = WaveError::InvalidConfig {
            reason: "percentile must be in [0, 1], got 1.5".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: percentile must be in [0, 1], got 1.5"
        );
    }

    #[test]
    fn from_table_missing_column() {
        let e: WaveError = TableError::MissingColumn {
            name: "doy".to_string(),
        }
        .into();
        assert_eq!(
            e,
            WaveError::MissingColumn {
                name: "doy".to_string()
            }
        );
    }

    #[test]
    fn from_table_other_is_wrapped() {
        let e: WaveError = TableError::EmptyColumnName.into();
        assert!(matches!(e, WaveError::Table(TableError::EmptyColumnName)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<WaveError>();
    }
}
