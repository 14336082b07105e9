//! Severity tiers of flagged days.

use serde::Serialize;
use thermowave_stats::{nan_mean, nan_quantile};
use thermowave_table::ObservationTable;

use crate::direction::Direction;
use crate::error::WaveError;

/// Severity of a flagged value relative to all flagged days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Milder than the mean flagged day.
    Moderate,
    /// Between the mean and the tail percentile.
    Strong,
    /// Beyond the tail percentile (p90 for heat, p10 for cold).
    Extreme,
}

/// Tier boundaries computed from the flagged days of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityTiers {
    direction: Direction,
    mean: f64,
    tail: f64,
}

impl SeverityTiers {
    /// Tail percentile used for [`Direction::AtLeast`].
    pub const UPPER_TAIL: f64 = 0.9;
    /// Tail percentile used for [`Direction::AtMost`].
    pub const LOWER_TAIL: f64 = 0.1;

    /// Builds tiers from the rows of `table` whose `flag` column is non-zero.
    ///
    /// With no flagged (or only `NaN`) values both boundaries are `NaN` and
    /// every value classifies as [`Tier::Strong`].
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::MissingColumn`] if `measure` or `flag` is
    /// absent, and [`WaveError::ColumnType`] if `flag` is not an integer
    /// column.
    pub fn from_flagged(
        table: &ObservationTable,
        measure: &str,
        flag: &str,
        direction: Direction,
    ) -> Result<Self, WaveError> {
        let values = table.float_column(measure)?;
        let flags = table.int_column(flag)?;
        let flagged: Vec<f64> = values
            .iter()
            .zip(flags.iter())
            .filter(|&(_, &f)| f != 0)
            .map(|(&v, _)| v)
            .collect();

        let p = match direction {
            Direction::AtLeast => Self::UPPER_TAIL,
            Direction::AtMost => Self::LOWER_TAIL,
        };
        Ok(Self {
            direction,
            mean: nan_mean(&flagged),
            tail: nan_quantile(&flagged, p),
        })
    }

    /// Mean of the flagged values.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Tail percentile of the flagged values.
    pub fn tail(&self) -> f64 {
        self.tail
    }

    /// Classifies `value`.
    ///
    /// For [`Direction::AtLeast`]: below the mean is moderate, above the
    /// tail is extreme, anything else strong. [`Direction::AtMost`] mirrors
    /// both comparisons.
    pub fn classify(&self, value: f64) -> Tier {
        let (milder, beyond) = match self.direction {
            Direction::AtLeast => (value < self.mean, value > self.tail),
            Direction::AtMost => (value > self.mean, value < self.tail),
        };
        if milder {
            Tier::Moderate
        } else if beyond {
            Tier::Extreme
        } else {
            Tier::Strong
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use thermowave_table::Column;

    fn table() -> ObservationTable {
        ObservationTable::from_columns([
            (
                "t",
                Column::Float((1..=11).map(|v| v as f64).collect()),
            ),
            ("flag", Column::Int(vec![0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1])),
        ])
        .unwrap()
    }

    #[test]
    fn heat_boundaries() {
        // Flagged values are 2..=11: mean 6.5, p90 = 10.1
        let tiers = SeverityTiers::from_flagged(&table(), "t", "flag", Direction::AtLeast).unwrap();
        assert_relative_eq!(tiers.mean(), 6.5, epsilon = 1e-12);
        assert_relative_eq!(tiers.tail(), 10.1, epsilon = 1e-12);
        assert_eq!(tiers.classify(3.0), Tier::Moderate);
        assert_eq!(tiers.classify(6.5), Tier::Strong);
        assert_eq!(tiers.classify(10.1), Tier::Strong);
        assert_eq!(tiers.classify(11.0), Tier::Extreme);
    }

    #[test]
    fn cold_boundaries_mirror() {
        // p10 of 2..=11 = 2.9
        let tiers = SeverityTiers::from_flagged(&table(), "t", "flag", Direction::AtMost).unwrap();
        assert_relative_eq!(tiers.tail(), 2.9, epsilon = 1e-12);
        assert_eq!(tiers.classify(9.0), Tier::Moderate);
        assert_eq!(tiers.classify(5.0), Tier::Strong);
        assert_eq!(tiers.classify(2.0), Tier::Extreme);
    }

    #[test]
    fn no_flagged_days() {
        let t = table()
            .with_column("flag", Column::Int(vec![0; 11]))
            .unwrap();
        let tiers = SeverityTiers::from_flagged(&t, "t", "flag", Direction::AtLeast).unwrap();
        assert!(tiers.mean().is_nan());
        assert_eq!(tiers.classify(100.0), Tier::Strong);
    }

    #[test]
    fn flag_must_be_integer() {
        let result = SeverityTiers::from_flagged(&table(), "flag", "t", Direction::AtLeast);
        assert!(matches!(result, Err(WaveError::ColumnType { .. })));
    }
}
