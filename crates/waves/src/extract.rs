//! Heatwave, coldwave and thermal-amplitude extractors.
//!
//! Each extractor is a thin wrapper over [`extract_waves`] that pins the
//! comparison direction of its event type. Every call owns its own run
//! state and episode counter, so running one extractor never disturbs the
//! numbering of another.

use thermowave_table::{Column, ObservationTable};

use crate::config::WaveConfig;
use crate::direction::Direction;
use crate::error::WaveError;
use crate::scan::extract_waves;

/// Flags heatwave days (`measure >= threshold`).
///
/// `config` is usually [`WaveConfig::heatwave`], possibly customised; its
/// direction is forced to [`Direction::AtLeast`].
///
/// # Errors
///
/// See [`extract_waves`].
pub fn get_heatwave(
    table: &ObservationTable,
    config: &WaveConfig,
) -> Result<ObservationTable, WaveError> {
    extract_waves(table, &config.clone().with_direction(Direction::AtLeast))
}

/// Flags coldwave days (`measure <= threshold`).
///
/// `config` is usually [`WaveConfig::coldwave`]; its direction is forced to
/// [`Direction::AtMost`].
///
/// # Errors
///
/// See [`extract_waves`].
pub fn get_coldwave(
    table: &ObservationTable,
    config: &WaveConfig,
) -> Result<ObservationTable, WaveError> {
    extract_waves(table, &config.clone().with_direction(Direction::AtMost))
}

/// Flags thermal-amplitude wave days.
///
/// Uses the persistence rule of the other extractors against the threshold
/// in `config`, normally [`WaveConfig::thermal_amplitude`] (a fixed 15
/// degree daily range). The direction is taken from `config` as is.
///
/// # Errors
///
/// See [`extract_waves`].
pub fn get_thermal_amplitude_wave(
    table: &ObservationTable,
    config: &WaveConfig,
) -> Result<ObservationTable, WaveError> {
    extract_waves(table, config)
}

/// Returns a copy of `table` with `out = max - min` as a float column.
///
/// `NaN` in either input gives `NaN`.
///
/// # Errors
///
/// Returns [`WaveError::MissingColumn`] if `max` or `min` is absent, or
/// [`WaveError::InvalidConfig`] if `out` names one of the inputs.
pub fn with_thermal_amplitude(
    table: &ObservationTable,
    max: &str,
    min: &str,
    out: &str,
) -> Result<ObservationTable, WaveError> {
    if out == max || out == min {
        return Err(WaveError::InvalidConfig {
            reason: format!("amplitude column '{out}' would overwrite its input"),
        });
    }
    let tmax = table.float_column(max)?;
    let tmin = table.float_column(min)?;
    let amplitude: Vec<f64> = tmax.iter().zip(tmin.iter()).map(|(a, b)| a - b).collect();

    let mut result = table.clone();
    result.set_column(out, Column::Float(amplitude))?;
    Ok(result)
}
