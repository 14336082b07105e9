//! Column helpers on [`ObservationTable`].

use thermowave_table::{Column, ObservationTable};

use crate::error::HumidexError;
use crate::{dewpoint, humidex};

/// Returns a copy of `table` with a dew point column computed from the
/// temperature column `temp` and relative humidity column `rh`.
///
/// # Errors
///
/// Returns [`HumidexError::OverwritesInput`] if `out` names an input and
/// [`HumidexError::Table`] if an input column is missing.
pub fn with_dewpoint(
    table: &ObservationTable,
    temp: &str,
    rh: &str,
    out: &str,
) -> Result<ObservationTable, HumidexError> {
    combine(table, temp, rh, out, dewpoint)
}

/// Returns a copy of `table` with a humidex column computed from the
/// temperature column `temp` and dew point column `td`.
///
/// # Errors
///
/// Same as [`with_dewpoint`].
pub fn with_humidex(
    table: &ObservationTable,
    temp: &str,
    td: &str,
    out: &str,
) -> Result<ObservationTable, HumidexError> {
    combine(table, temp, td, out, humidex)
}

/// Returns a copy of `table` with a humidex column, estimating the dew point
/// from the relative humidity column `rh`.
///
/// # Errors
///
/// Same as [`with_dewpoint`].
pub fn with_humidex_from_humidity(
    table: &ObservationTable,
    temp: &str,
    rh: &str,
    out: &str,
) -> Result<ObservationTable, HumidexError> {
    combine(table, temp, rh, out, |t, h| humidex(t, dewpoint(t, h)))
}

fn combine<F>(
    table: &ObservationTable,
    a: &str,
    b: &str,
    out: &str,
    f: F,
) -> Result<ObservationTable, HumidexError>
where
    F: Fn(f64, f64) -> f64,
{
    if out == a || out == b {
        return Err(HumidexError::OverwritesInput {
            name: out.to_string(),
        });
    }
    let xs = table.float_column(a)?;
    let ys = table.float_column(b)?;
    let values: Vec<f64> = xs.iter().zip(ys.iter()).map(|(&x, &y)| f(x, y)).collect();

    let mut result = table.clone();
    result.set_column(out, Column::Float(values))?;
    Ok(result)
}
