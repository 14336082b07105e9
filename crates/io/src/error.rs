//! Error types for thermowave-io.

use std::path::PathBuf;

use thermowave_table::TableError;

/// Error type for all fallible operations in the thermowave-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the csv crate.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps a filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a cell is neither empty, a missing-value marker, nor a
    /// number.
    #[error("cannot parse '{value}' in column '{column}' at line {line}")]
    Parse {
        /// Column holding the cell.
        column: String,
        /// 1-based line in the file, header included.
        line: u64,
        /// Raw cell content.
        value: String,
    },

    /// Returned when the parsed columns do not form a valid table.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Returned when JSON serialization fails.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying serde failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
