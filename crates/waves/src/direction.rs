//! Comparison direction of an extreme event.

use serde::Serialize;

/// Whether a day breaches its threshold from above or from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Breach when `value >= threshold` (heatwaves, amplitude waves).
    AtLeast,
    /// Breach when `value <= threshold` (coldwaves).
    AtMost,
}

impl Direction {
    /// Tests `value` against `threshold`.
    ///
    /// Always `false` when either operand is `NaN`, so a missing value or an
    /// undefined threshold can never qualify.
    #[inline]
    pub fn satisfies(self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::AtLeast => value >= threshold,
            Direction::AtMost => value <= threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_is_inclusive() {
        assert!(Direction::AtLeast.satisfies(35.0, 35.0));
        assert!(Direction::AtLeast.satisfies(35.1, 35.0));
        assert!(!Direction::AtLeast.satisfies(34.9, 35.0));
    }

    #[test]
    fn at_most_is_inclusive() {
        assert!(Direction::AtMost.satisfies(5.0, 5.0));
        assert!(Direction::AtMost.satisfies(4.0, 5.0));
        assert!(!Direction::AtMost.satisfies(6.0, 5.0));
    }

    #[test]
    fn nan_never_satisfies() {
        for dir in [Direction::AtLeast, Direction::AtMost] {
            assert!(!dir.satisfies(f64::NAN, 10.0));
            assert!(!dir.satisfies(10.0, f64::NAN));
        }
    }
}
