//! Humidex and dew point helpers.
//!
//! The humidex combines air temperature and humidity into a single
//! "feels like" temperature (Masterton & Richardson, 1979). All inputs and
//! outputs are in degrees Celsius; relative humidity is in percent.
//!
//! # Quick start
//!
//! ```rust
//! use thermowave_humidex::{dewpoint, humidex};
//!
//! let td = dewpoint(30.0, 60.0);
//! assert!((td - 22.0).abs() < 1e-12);
//! assert!(humidex(30.0, td) > 30.0);
//! ```

mod column;
mod error;

pub use column::{with_dewpoint, with_humidex, with_humidex_from_humidity};
pub use error::HumidexError;

/// Kelvin offset of the triple point of water used by the formula.
const T0: f64 = 273.16;
/// `L / Rv` for water vapour, in kelvin.
const LV_OVER_RV: f64 = 5417.7530;
/// Saturation vapour pressure at `T0`, in hPa.
const E0: f64 = 6.11;

/// Vapour pressure in hPa at dew point `td`.
pub fn vapour_pressure(td: f64) -> f64 {
    E0 * (LV_OVER_RV * (1.0 / T0 - 1.0 / (td + T0))).exp()
}

/// Humidex for air temperature `t` and dew point `td`.
pub fn humidex(t: f64, td: f64) -> f64 {
    t + 0.5555 * (vapour_pressure(td) - 10.0)
}

/// Dew point approximated from temperature `t` and relative humidity `rh`.
///
/// Uses the linear rule `t - (100 - rh) / 5`, accurate to about 1 degree
/// above 50 % humidity.
pub fn dewpoint(t: f64, rh: f64) -> f64 {
    t - (100.0 - rh) / 5.0
}
