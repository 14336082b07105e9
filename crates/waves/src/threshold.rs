//! Per-day threshold resolution.
//!
//! Windowed thresholds pool every row of the table, whatever its year,
//! whose day identifier falls inside `day ± half_width`: the percentile acts
//! as a climatological baseline for that time of year.

use std::collections::{BTreeMap, HashMap};

use thermowave_stats::nan_quantile;
use tracing::warn;

use crate::config::ThresholdSpec;

/// Percentile of `values` over rows whose day lies in
/// `[day - half_width, day + half_width]`.
///
/// `NaN` values are skipped; the result is `NaN` when the window holds no
/// other value.
pub fn window_threshold(
    days: &[i64],
    values: &[f64],
    day: i64,
    percentile: f64,
    half_width: u32,
) -> f64 {
    let hw = i64::from(half_width);
    let window: Vec<f64> = days
        .iter()
        .zip(values.iter())
        .filter(|&(&d, _)| d >= day - hw && d <= day + hw)
        .map(|(_, &v)| v)
        .collect();
    nan_quantile(&window, percentile)
}

/// Thresholds resolved once for every distinct day of a table.
///
/// The scanner only reads from this, so it can be shared across worker
/// threads.
#[derive(Debug, Clone)]
pub struct DayThresholds {
    spec: ThresholdSpec,
    by_day: HashMap<i64, f64>,
}

impl DayThresholds {
    /// Resolves thresholds for each distinct value in `days`.
    ///
    /// `days` and `values` are parallel columns of the full table.
    pub fn resolve(days: &[i64], values: &[f64], spec: ThresholdSpec) -> Self {
        let by_day = match spec {
            ThresholdSpec::Fixed(_) => HashMap::new(),
            ThresholdSpec::Windowed {
                percentile,
                half_width,
            } => {
                let mut pooled: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
                for (&d, &v) in days.iter().zip(values.iter()) {
                    pooled.entry(d).or_default().push(v);
                }

                let hw = i64::from(half_width);
                let resolved: HashMap<i64, f64> = pooled
                    .keys()
                    .map(|&d| {
                        let window: Vec<f64> = pooled
                            .range(d - hw..=d + hw)
                            .flat_map(|(_, v)| v.iter().copied())
                            .collect();
                        (d, nan_quantile(&window, percentile))
                    })
                    .collect();

                let undefined = resolved.values().filter(|t| t.is_nan()).count();
                if undefined > 0 {
                    warn!(
                        n_days = undefined,
                        "no finite values in percentile window; those days cannot qualify"
                    );
                }
                resolved
            }
        };
        Self { spec, by_day }
    }

    /// Threshold for `day`.
    ///
    /// For windowed specs, a day that was not present at resolution time
    /// yields `NaN`.
    pub fn get(&self, day: i64) -> f64 {
        match self.spec {
            ThresholdSpec::Fixed(v) => v,
            ThresholdSpec::Windowed { .. } => self.by_day.get(&day).copied().unwrap_or(f64::NAN),
        }
    }

    /// The threshold rule these values were resolved from.
    pub fn spec(&self) -> ThresholdSpec {
        self.spec
    }
}
