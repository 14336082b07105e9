//! Statistical helper functions for the thermowave crates.
//!
//! Quantiles follow R's type-7 definition, which is also the default
//! `linear` interpolation used by pandas and NumPy.

use std::cmp::Ordering;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Arithmetic mean of the finite values in `data`.
///
/// Returns `NaN` when no finite value is present.
pub fn nan_mean(data: &[f64]) -> f64 {
    let finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    mean(&finite)
}

/// R's default quantile algorithm (type=7).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Copies the non-NaN values of `data` into a new ascending vector.
pub fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Type-7 quantile of `data`, skipping `NaN` values.
///
/// Unlike [`quantile_type7`] this accepts unsorted input and never panics:
/// when nothing is left after dropping `NaN`s the result is `NaN`, which
/// callers treat as an undefined threshold.
pub fn nan_quantile(data: &[f64], p: f64) -> f64 {
    let sorted = sorted_finite(data);
    if sorted.is_empty() {
        return f64::NAN;
    }
    quantile_type7(&sorted, p)
}
