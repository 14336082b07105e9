//! Error types for the thermowave-humidex crate.

use thermowave_table::TableError;

/// Error type for the table helpers of this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HumidexError {
    /// Returned when the output column would replace one of its inputs.
    #[error("output column '{name}' would overwrite an input column")]
    OverwritesInput {
        /// Name of the output column.
        name: String,
    },

    /// A table lookup or update failed.
    #[error(transparent)]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_overwrites_input() {
        let e = HumidexError::OverwritesInput {
            name: "tas".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "output column 'tas' would overwrite an input column"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<HumidexError>();
    }
}
