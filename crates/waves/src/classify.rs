//! Episode-day classification.

use crate::direction::Direction;
use crate::presence::{YearDays, has_3day_run};

/// Decides whether `day` belongs to an extreme episode.
///
/// The day must breach `threshold` itself and be flanked by a breaching
/// 2-day run, either `day-1, day-2` or `day+1, day+2`. Rows for `day`,
/// `day-1` and `day-2` must all exist; a missing `day+1` or `day+2` simply
/// fails its comparison. `values` is the measure column of the whole table,
/// indexed by row.
///
/// A `NaN` threshold or value never breaches.
pub fn is_episode_day(
    year: &YearDays,
    values: &[f64],
    day: i64,
    threshold: f64,
    direction: Direction,
) -> bool {
    if !has_3day_run(year, day) {
        return false;
    }
    let breach = |d: i64| {
        year.row(d)
            .and_then(|row| values.get(row))
            .is_some_and(|&v| direction.satisfies(v, threshold))
    };

    let c0 = breach(day);
    let c_back = breach(day - 1) && breach(day - 2);
    let c_fwd = breach(day + 1) && breach(day + 2);
    c0 && (c_back || c_fwd)
}
