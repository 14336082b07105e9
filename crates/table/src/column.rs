//! Typed column storage.

use std::borrow::Cow;
use std::fmt;

/// Kind of values a [`Column`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// 64-bit signed integers.
    Int,
    /// 64-bit floats; `NaN` marks a missing value.
    Float,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Int => f.write_str("integer"),
            ColumnKind::Float => f.write_str("float"),
        }
    }
}

/// A single named column's values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Integer values (years, days, flags, episode ids).
    Int(Vec<i64>),
    /// Floating point values (temperatures and derived measures).
    Float(Vec<f64>),
}

impl Column {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
        }
    }

    /// Returns `true` if the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the kind of values stored.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Int(_) => ColumnKind::Int,
            Column::Float(_) => ColumnKind::Float,
        }
    }

    /// Returns the integer values, or `None` for a float column.
    pub fn as_int(&self) -> Option<&[i64]> {
        match self {
            Column::Int(v) => Some(v),
            Column::Float(_) => None,
        }
    }

    /// Returns the float values, or `None` for an integer column.
    pub fn as_float(&self) -> Option<&[f64]> {
        match self {
            Column::Float(v) => Some(v),
            Column::Int(_) => None,
        }
    }

    /// Returns the values as `f64`, borrowing when no conversion is needed.
    pub fn to_f64(&self) -> Cow<'_, [f64]> {
        match self {
            Column::Float(v) => Cow::Borrowed(v),
            Column::Int(v) => Cow::Owned(v.iter().map(|&x| x as f64).collect()),
        }
    }
}
