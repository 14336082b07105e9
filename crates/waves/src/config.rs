//! Configuration for wave extraction.

use crate::direction::Direction;
use crate::error::WaveError;
use crate::sequence::EpisodeScope;

/// Half-width, in days, of the default percentile window.
pub const DEFAULT_HALF_WIDTH: u32 = 15;

/// Specifies how the per-day threshold is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdSpec {
    /// Percentile of every row (any year) whose day lies within
    /// `day ± half_width`.
    Windowed {
        /// Percentile in `[0, 1]`.
        percentile: f64,
        /// Half-width of the day window.
        half_width: u32,
    },
    /// The same threshold for every day.
    Fixed(f64),
}

impl ThresholdSpec {
    /// Windowed percentile with the default ±15-day window.
    pub fn windowed(percentile: f64) -> Self {
        ThresholdSpec::Windowed {
            percentile,
            half_width: DEFAULT_HALF_WIDTH,
        }
    }
}

/// Configuration for [`extract_waves`](crate::extract_waves).
///
/// Use the presets ([`heatwave`](Self::heatwave),
/// [`coldwave`](Self::coldwave), [`thermal_amplitude`](Self::thermal_amplitude))
/// and the builder methods to customise column names and parameters.
///
/// # Example
///
/// ```
/// use thermowave_waves::{EpisodeScope, WaveConfig};
///
/// let config = WaveConfig::heatwave()
///     .with_measure("MAX_AIR_TEMP")
///     .with_scope(EpisodeScope::PerYear);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    measure: String,
    threshold: ThresholdSpec,
    direction: Direction,
    year_col: String,
    day_col: String,
    flag_col: String,
    episode_col: String,
    scope: EpisodeScope,
    parallel: bool,
}

impl WaveConfig {
    /// Creates a configuration for `measure` with heatwave defaults.
    pub fn new(measure: impl Into<String>) -> Self {
        Self {
            measure: measure.into(),
            threshold: ThresholdSpec::windowed(0.9),
            direction: Direction::AtLeast,
            year_col: "year".to_string(),
            day_col: "doy".to_string(),
            flag_col: "flag".to_string(),
            episode_col: "episode".to_string(),
            scope: EpisodeScope::Global,
            parallel: false,
        }
    }

    /// Heatwaves: `tasmax >= p90` of the ±15-day window.
    pub fn heatwave() -> Self {
        Self::new("tasmax")
            .with_threshold(ThresholdSpec::windowed(0.9))
            .with_direction(Direction::AtLeast)
            .with_flag_col("heatwave")
            .with_episode_col("heatwave_id")
    }

    /// Coldwaves: `tasmin <= p10` of the ±15-day window.
    pub fn coldwave() -> Self {
        Self::new("tasmin")
            .with_threshold(ThresholdSpec::windowed(0.1))
            .with_direction(Direction::AtMost)
            .with_flag_col("coldwave")
            .with_episode_col("coldwave_id")
    }

    /// Thermal-amplitude waves: daily range `dtr >= 15` degrees.
    pub fn thermal_amplitude() -> Self {
        Self::new("dtr")
            .with_threshold(ThresholdSpec::Fixed(15.0))
            .with_direction(Direction::AtLeast)
            .with_flag_col("ampwave")
            .with_episode_col("ampwave_id")
    }

    /// Sets the measure column.
    pub fn with_measure(mut self, name: impl Into<String>) -> Self {
        self.measure = name.into();
        self
    }

    /// Sets the threshold rule.
    pub fn with_threshold(mut self, threshold: ThresholdSpec) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the comparison direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the year column.
    pub fn with_year_col(mut self, name: impl Into<String>) -> Self {
        self.year_col = name.into();
        self
    }

    /// Sets the day-of-year column.
    pub fn with_day_col(mut self, name: impl Into<String>) -> Self {
        self.day_col = name.into();
        self
    }

    /// Sets the output flag column.
    pub fn with_flag_col(mut self, name: impl Into<String>) -> Self {
        self.flag_col = name.into();
        self
    }

    /// Sets the output episode-id column.
    pub fn with_episode_col(mut self, name: impl Into<String>) -> Self {
        self.episode_col = name.into();
        self
    }

    /// Sets whether episode ids restart every year.
    pub fn with_scope(mut self, scope: EpisodeScope) -> Self {
        self.scope = scope;
        self
    }

    /// Scans years on the rayon thread pool when `true`.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // --- Accessors ---

    /// Returns the measure column name.
    pub fn measure(&self) -> &str {
        &self.measure
    }

    /// Returns the threshold rule.
    pub fn threshold(&self) -> ThresholdSpec {
        self.threshold
    }

    /// Returns the comparison direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the year column name.
    pub fn year_col(&self) -> &str {
        &self.year_col
    }

    /// Returns the day-of-year column name.
    pub fn day_col(&self) -> &str {
        &self.day_col
    }

    /// Returns the output flag column name.
    pub fn flag_col(&self) -> &str {
        &self.flag_col
    }

    /// Returns the output episode-id column name.
    pub fn episode_col(&self) -> &str {
        &self.episode_col
    }

    /// Returns the episode id scope.
    pub fn scope(&self) -> EpisodeScope {
        self.scope
    }

    /// Returns whether years are scanned in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates this configuration.
    ///
    /// Checks that the percentile is in `[0, 1]`, a fixed threshold is
    /// finite, no column name is empty, and the two output columns differ
    /// from each other and from the input columns.
    pub fn validate(&self) -> Result<(), WaveError> {
        match self.threshold {
            ThresholdSpec::Windowed { percentile, .. } => {
                if !percentile.is_finite() || !(0.0..=1.0).contains(&percentile) {
                    return Err(WaveError::InvalidConfig {
                        reason: format!("percentile must be in [0, 1], got {percentile}"),
                    });
                }
            }
            ThresholdSpec::Fixed(v) => {
                if !v.is_finite() {
                    return Err(WaveError::InvalidConfig {
                        reason: format!("fixed threshold must be finite, got {v}"),
                    });
                }
            }
        }

        let names = [
            ("measure", &self.measure),
            ("year_col", &self.year_col),
            ("day_col", &self.day_col),
            ("flag_col", &self.flag_col),
            ("episode_col", &self.episode_col),
        ];
        for (field, name) in names {
            if name.is_empty() {
                return Err(WaveError::InvalidConfig {
                    reason: format!("{field} must not be empty"),
                });
            }
        }

        if self.flag_col == self.episode_col {
            return Err(WaveError::InvalidConfig {
                reason: format!(
                    "flag_col and episode_col must differ, both are '{}'",
                    self.flag_col
                ),
            });
        }
        for output in [&self.flag_col, &self.episode_col] {
            if [&self.measure, &self.year_col, &self.day_col].contains(&output) {
                return Err(WaveError::InvalidConfig {
                    reason: format!("output column '{output}' would overwrite an input column"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heatwave_defaults() {
        let cfg = WaveConfig::heatwave();
        assert_eq!(cfg.measure(), "tasmax");
        assert_eq!(cfg.direction(), Direction::AtLeast);
        assert_eq!(
            cfg.threshold(),
            ThresholdSpec::Windowed {
                percentile: 0.9,
                half_width: 15
            }
        );
        assert_eq!(cfg.year_col(), "year");
        assert_eq!(cfg.day_col(), "doy");
        assert_eq!(cfg.flag_col(), "heatwave");
        assert_eq!(cfg.episode_col(), "heatwave_id");
        assert_eq!(cfg.scope(), EpisodeScope::Global);
        assert!(!cfg.parallel());
    }

    #[test]
    fn coldwave_defaults() {
        let cfg = WaveConfig::coldwave();
        assert_eq!(cfg.measure(), "tasmin");
        assert_eq!(cfg.direction(), Direction::AtMost);
        assert!(matches!(
            cfg.threshold(),
            ThresholdSpec::Windowed { percentile, .. } if (percentile - 0.1).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn thermal_amplitude_defaults() {
        let cfg = WaveConfig::thermal_amplitude();
        assert_eq!(cfg.measure(), "dtr");
        assert_eq!(cfg.threshold(), ThresholdSpec::Fixed(15.0));
        assert_eq!(cfg.flag_col(), "ampwave");
        assert_ne!(cfg.flag_col(), WaveConfig::coldwave().flag_col());
    }

    #[test]
    fn builder_chaining() {
        let cfg = WaveConfig::new("t")
            .with_year_col("YEAR")
            .with_day_col("DAY365")
            .with_flag_col("f")
            .with_episode_col("e")
            .with_scope(EpisodeScope::PerYear)
            .with_parallel(true);
        assert_eq!(cfg.year_col(), "YEAR");
        assert_eq!(cfg.day_col(), "DAY365");
        assert_eq!(cfg.scope(), EpisodeScope::PerYear);
        assert!(cfg.parallel());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_presets_ok() {
        assert!(WaveConfig::heatwave().validate().is_ok());
        assert!(WaveConfig::coldwave().validate().is_ok());
        assert!(WaveConfig::thermal_amplitude().validate().is_ok());
    }

    #[test]
    fn validate_bad_percentile() {
        for p in [-0.1, 1.5, f64::NAN] {
            let cfg = WaveConfig::heatwave().with_threshold(ThresholdSpec::windowed(p));
            assert!(matches!(
                cfg.validate(),
                Err(WaveError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn validate_percentile_bounds_inclusive() {
        for p in [0.0, 1.0] {
            let cfg = WaveConfig::heatwave().with_threshold(ThresholdSpec::windowed(p));
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn validate_bad_fixed() {
        let cfg = WaveConfig::thermal_amplitude().with_threshold(ThresholdSpec::Fixed(f64::NAN));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_empty_name() {
        assert!(WaveConfig::heatwave().with_day_col("").validate().is_err());
    }

    #[test]
    fn validate_output_collisions() {
        assert!(
            WaveConfig::heatwave()
                .with_episode_col("heatwave")
                .validate()
                .is_err()
        );
        assert!(
            WaveConfig::heatwave()
                .with_flag_col("tasmax")
                .validate()
                .is_err()
        );
    }
}
