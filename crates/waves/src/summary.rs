//! Per-episode summaries of an annotated table.

use std::collections::HashMap;

use serde::Serialize;
use thermowave_stats::nan_mean;
use thermowave_table::ObservationTable;
use tracing::debug;

use crate::config::WaveConfig;
use crate::direction::Direction;
use crate::error::WaveError;
use crate::severity::{SeverityTiers, Tier};

/// Summary of one episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    /// Year the episode belongs to.
    pub year: i64,
    /// Episode id.
    pub episode: i64,
    /// Day of the first row of the episode.
    pub start_day: i64,
    /// Day of the last row of the episode.
    pub end_day: i64,
    /// Number of flagged days.
    pub n_days: usize,
    /// Most extreme value: the maximum for `AtLeast`, the minimum for `AtMost`.
    pub peak: f64,
    /// Mean of the finite values.
    pub mean: f64,
    /// Severity tier of `peak` among all flagged days of the table.
    pub peak_tier: Tier,
}

/// Summarises every episode of a table annotated by
/// [`extract_waves`](crate::extract_waves) with `config`.
///
/// Episodes are keyed on `(year, episode id)` and returned in the order
/// their first row appears.
///
/// # Errors
///
/// Returns [`WaveError::MissingColumn`] / [`WaveError::ColumnType`] if any
/// of the year, day, measure, flag or episode columns is absent or of the
/// wrong kind.
#[tracing::instrument(skip_all, fields(episode_col = config.episode_col()))]
pub fn summarize_episodes(
    table: &ObservationTable,
    config: &WaveConfig,
) -> Result<Vec<EpisodeSummary>, WaveError> {
    let years = table.int_column(config.year_col())?;
    let days = table.int_column(config.day_col())?;
    let values = table.float_column(config.measure())?;
    let episodes = table.int_column(config.episode_col())?;
    let direction = config.direction();
    let tiers = SeverityTiers::from_flagged(
        table,
        config.measure(),
        config.flag_col(),
        direction,
    )?;

    let mut index: HashMap<(i64, i64), usize> = HashMap::new();
    let mut rows: Vec<Vec<usize>> = Vec::new();
    for (row, (&year, &episode)) in years.iter().zip(episodes.iter()).enumerate() {
        if episode <= 0 {
            continue;
        }
        let idx = *index.entry((year, episode)).or_insert_with(|| {
            rows.push(Vec::new());
            rows.len() - 1
        });
        rows[idx].push(row);
    }

    let mut summaries = Vec::with_capacity(rows.len());
    for members in &rows {
        let (Some(&first), Some(&last)) = (members.first(), members.last()) else {
            continue;
        };
        let episode_values: Vec<f64> = members.iter().map(|&r| values[r]).collect();
        let peak = peak_of(&episode_values, direction);
        summaries.push(EpisodeSummary {
            year: years[first],
            episode: episodes[first],
            start_day: days[first],
            end_day: days[last],
            n_days: members.len(),
            peak,
            mean: nan_mean(&episode_values),
            peak_tier: tiers.classify(peak),
        });
    }

    debug!(n_episodes = summaries.len(), "episodes summarised");
    Ok(summaries)
}

/// Maximum (`AtLeast`) or minimum (`AtMost`) of the non-`NaN` values.
fn peak_of(values: &[f64], direction: Direction) -> f64 {
    let finite = values.iter().copied().filter(|v| !v.is_nan());
    match direction {
        Direction::AtLeast => finite.fold(f64::NAN, f64::max),
        Direction::AtMost => finite.fold(f64::NAN, f64::min),
    }
}
