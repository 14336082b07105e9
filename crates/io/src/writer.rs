//! CSV writer for [`ObservationTable`].

use std::path::Path;

use thermowave_table::{Column, ObservationTable};
use tracing::info;

use crate::error::IoError;

/// Configuration for writing observation tables to CSV.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Field delimiter.
    delimiter: u8,
    /// Digits after the decimal point for float cells; `None` writes the
    /// shortest representation that reads back exactly.
    float_precision: Option<usize>,
    /// Text written for `NaN` cells.
    missing: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            float_precision: None,
            missing: String::new(),
        }
    }
}

impl WriterConfig {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets a fixed number of decimals for float cells.
    pub fn with_float_precision(mut self, digits: Option<usize>) -> Self {
        self.float_precision = digits;
        self
    }

    /// Sets the text written for missing values.
    pub fn with_missing(mut self, missing: impl Into<String>) -> Self {
        self.missing = missing.into();
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the float precision.
    pub fn float_precision(&self) -> Option<usize> {
        self.float_precision
    }

    /// Returns the missing-value text.
    pub fn missing(&self) -> &str {
        &self.missing
    }

    fn format_float(&self, v: f64) -> String {
        if v.is_nan() {
            return self.missing.clone();
        }
        match self.float_precision {
            Some(digits) => format!("{v:.digits$}"),
            // Debug keeps a trailing ".0" so the column reads back as float.
            None => format!("{v:?}"),
        }
    }
}

/// Writes `table` to `path` as CSV with a header row.
///
/// Parent directories must exist; an existing file is overwritten.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] if the file cannot be written.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), n_rows = table.n_rows()))]
pub fn write_csv(
    path: impl AsRef<Path>,
    table: &ObservationTable,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_path(path.as_ref())?;

    writer.write_record(table.column_names())?;

    let columns: Vec<&Column> = table.columns().map(|(_, c)| c).collect();
    let mut record: Vec<String> = Vec::with_capacity(columns.len());
    for row in 0..table.n_rows() {
        record.clear();
        for column in &columns {
            record.push(match column {
                Column::Int(v) => v[row].to_string(),
                Column::Float(v) => config.format_float(v[row]),
            });
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(n_columns = columns.len(), "table written");
    Ok(())
}
