//! Observation table container.

use std::borrow::Cow;

use crate::column::{Column, ColumnKind};
use crate::error::TableError;

/// Ordered collection of equally long, uniquely named columns.
///
/// Column order is preserved; replacing a column keeps its position. A table
/// without columns has zero rows and accepts a first column of any length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    names: Vec<String>,
    columns: Vec<Column>,
    n_rows: usize,
}

impl ObservationTable {
    /// Creates an empty table with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, column)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateColumn`] if a name repeats,
    /// [`TableError::EmptyColumnName`] for an empty name, or
    /// [`TableError::LengthMismatch`] if the columns differ in length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, column) in columns {
            let name = name.into();
            if table.contains(&name) {
                return Err(TableError::DuplicateColumn { name });
            }
            table.set_column(name, column)?;
        }
        Ok(table)
    }

    /// Appends `column`, or replaces an existing column of the same name.
    ///
    /// # Errors
    ///
    /// See [`set_column`](Self::set_column).
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<Self, TableError> {
        self.set_column(name, column)?;
        Ok(self)
    }

    /// Appends `column`, or replaces an existing column of the same name in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyColumnName`] for an empty name and
    /// [`TableError::LengthMismatch`] if the table already has columns and
    /// `column` has a different length.
    pub fn set_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<(), TableError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TableError::EmptyColumnName);
        }
        if !self.columns.is_empty() && column.len() != self.n_rows {
            return Err(TableError::LengthMismatch {
                name,
                expected: self.n_rows,
                got: column.len(),
            });
        }
        if self.columns.is_empty() {
            self.n_rows = column.len();
        }
        match self.position(&name) {
            Some(i) => self.columns[i] = column,
            None => {
                self.names.push(name);
                self.columns.push(column);
            }
        }
        Ok(())
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if a column called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|i| &self.columns[i])
    }

    /// Iterates `(name, column)` pairs in table order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Returns the values of an integer column.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingColumn`] if absent and
    /// [`TableError::ColumnType`] if the column holds floats.
    pub fn int_column(&self, name: &str) -> Result<&[i64], TableError> {
        self.require(name)?
            .as_int()
            .ok_or_else(|| TableError::ColumnType {
                name: name.to_string(),
                expected: ColumnKind::Int,
            })
    }

    /// Returns the values of a numeric column as `f64`.
    ///
    /// Integer columns are converted; float columns are borrowed.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingColumn`] if absent.
    pub fn float_column(&self, name: &str) -> Result<Cow<'_, [f64]>, TableError> {
        Ok(self.require(name)?.to_f64())
    }

    fn require(&self, name: &str) -> Result<&Column, TableError> {
        self.column(name).ok_or_else(|| TableError::MissingColumn {
            name: name.to_string(),
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
