//! CSV reader producing an [`ObservationTable`].

use std::path::Path;

use thermowave_table::{Column, ObservationTable};
use tracing::{debug, info};

use crate::error::IoError;

/// Configuration for reading observation tables from CSV files.
///
/// The first record is the header. Cells are trimmed before parsing; an
/// empty cell or one matching a missing-value marker is a missing value.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter.
    delimiter: u8,
    /// Cell contents treated as missing, in addition to the empty string.
    missing_markers: Vec<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_markers: vec!["NA".into(), "NaN".into(), "nan".into()],
        }
    }
}

impl ReaderConfig {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replaces the missing-value markers.
    pub fn with_missing_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the missing-value markers.
    pub fn missing_markers(&self) -> &[String] {
        &self.missing_markers
    }

    fn is_missing(&self, cell: &str) -> bool {
        cell.is_empty() || self.missing_markers.iter().any(|m| m == cell)
    }
}

/// Reads a CSV file into an [`ObservationTable`].
///
/// A column becomes [`Column::Int`] when it has no missing value and every
/// cell parses as `i64`; otherwise it is a [`Column::Float`] with missing
/// cells stored as `NaN`.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Csv`] for malformed CSV (including ragged rows).
/// - [`IoError::Parse`] for a non-numeric, non-missing cell.
/// - [`IoError::Table`] for duplicate or empty header names.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_csv(
    path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<ObservationTable, IoError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); names.len()];
    let mut lines: Vec<u64> = Vec::new();

    for record in reader.records() {
        let record = record?;
        lines.push(record.position().map_or(0, |p| p.line()));
        for (column, cell) in cells.iter_mut().zip(record.iter()) {
            column.push(cell.to_string());
        }
    }
    debug!(n_columns = names.len(), n_rows = lines.len(), "records read");

    let columns = names
        .iter()
        .zip(cells.iter())
        .map(|(name, column)| Ok((name.clone(), infer_column(name, column, &lines, config)?)))
        .collect::<Result<Vec<_>, IoError>>()?;
    let table = ObservationTable::from_columns(columns)?;

    info!(
        n_rows = table.n_rows(),
        n_columns = table.n_columns(),
        "table loaded"
    );
    Ok(table)
}

/// Parses the raw cells of one column.
fn infer_column(
    name: &str,
    cells: &[String],
    lines: &[u64],
    config: &ReaderConfig,
) -> Result<Column, IoError> {
    let ints: Option<Vec<i64>> = cells
        .iter()
        .map(|c| {
            if config.is_missing(c) {
                None
            } else {
                c.parse::<i64>().ok()
            }
        })
        .collect();
    if let Some(ints) = ints {
        return Ok(Column::Int(ints));
    }

    let floats = cells
        .iter()
        .zip(lines.iter())
        .map(|(c, &line)| {
            if config.is_missing(c) {
                return Ok(f64::NAN);
            }
            c.parse::<f64>().map_err(|_| IoError::Parse {
                column: name.to_string(),
                line,
                value: c.clone(),
            })
        })
        .collect::<Result<Vec<f64>, IoError>>()?;
    Ok(Column::Float(floats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn infer_int() {
        let cells = strings(&["1", "2", "3"]);
        let col = infer_column("doy", &cells, &[2, 3, 4], &ReaderConfig::default()).unwrap();
        assert_eq!(col, Column::Int(vec![1, 2, 3]));
    }

    #[test]
    fn infer_float_from_decimal() {
        let col = infer_column("t", &strings(&["1", "2.5"]), &[2, 3], &ReaderConfig::default())
            .unwrap();
        assert_eq!(col, Column::Float(vec![1.0, 2.5]));
    }

    #[test]
    fn missing_cell_makes_int_column_float() {
        let cells = strings(&["1", "", "NA"]);
        let col = infer_column("t", &cells, &[2, 3, 4], &ReaderConfig::default()).unwrap();
        let values = col.as_float().unwrap();
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert!(values[2].is_nan());
    }

    #[test]
    fn garbage_is_parse_error() {
        let err = infer_column("t", &strings(&["1", "warm"]), &[2, 3], &ReaderConfig::default())
            .unwrap_err();
        match err {
            IoError::Parse { column, line, value } => {
                assert_eq!(column, "t");
                assert_eq!(line, 3);
                assert_eq!(value, "warm");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_markers() {
        let config = ReaderConfig::default().with_missing_markers(["-999"]);
        let col = infer_column("t", &strings(&["-999", "4"]), &[2, 3], &config).unwrap();
        assert!(col.as_float().unwrap()[0].is_nan());
        // "NA" is no longer a marker.
        assert!(infer_column("t", &strings(&["NA"]), &[2], &config).is_err());
    }

    #[test]
    fn empty_column_is_int() {
        let col = infer_column("t", &[], &[], &ReaderConfig::default()).unwrap();
        assert_eq!(col, Column::Int(vec![]));
    }
}
