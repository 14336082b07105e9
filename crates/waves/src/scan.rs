//! Windowed-threshold scan over years and days.

use rayon::prelude::*;
use thermowave_table::{Column, ObservationTable};
use tracing::debug;

use crate::classify::is_episode_day;
use crate::config::WaveConfig;
use crate::direction::Direction;
use crate::error::WaveError;
use crate::presence::YearDays;
use crate::sequence::{EpisodeCounter, EpisodeScope, EpisodeSequence};
use crate::threshold::DayThresholds;

/// Rows of one contiguous flagged run, in scan order.
type Run = Vec<usize>;

/// State threaded through the day loop of one year.
#[derive(Debug, Default, Clone, Copy)]
struct RunState {
    in_run: bool,
}

/// Flags extreme-event days and numbers their episodes.
///
/// Returns a copy of `table` with two integer columns set:
/// [`WaveConfig::flag_col`] (0/1) and [`WaveConfig::episode_col`]
/// (0 = no episode). Existing columns with those names are replaced.
///
/// Years are visited in the order they first appear in the table, and the
/// days of a year in the order they first appear for that year; the input
/// is not sorted. A run is a sequence of consecutively visited flagged days,
/// and runs never span two years. Ids come from a fresh
/// [`EpisodeCounter`]; use [`extract_waves_with`] to supply another
/// sequence.
///
/// # Errors
///
/// - [`WaveError::InvalidConfig`] if `config` fails validation.
/// - [`WaveError::MissingColumn`] / [`WaveError::ColumnType`] if the year,
///   day or measure column is absent, or year/day are not integer columns.
/// - [`WaveError::DuplicateDay`] if a day repeats within a year.
pub fn extract_waves(
    table: &ObservationTable,
    config: &WaveConfig,
) -> Result<ObservationTable, WaveError> {
    let mut sequence = EpisodeCounter::new();
    extract_waves_with(table, config, &mut sequence)
}

/// [`extract_waves`] drawing episode ids from `sequence`.
///
/// The sequence is consulted once per run in year order, then day order,
/// and reset before every year when the scope is
/// [`EpisodeScope::PerYear`]. Parallel mode produces the same ids because
/// numbering happens after all years are scanned.
///
/// # Errors
///
/// Same as [`extract_waves`].
#[tracing::instrument(
    skip_all,
    fields(measure = config.measure(), n_rows = table.n_rows(), parallel = config.parallel())
)]
pub fn extract_waves_with<S>(
    table: &ObservationTable,
    config: &WaveConfig,
    sequence: &mut S,
) -> Result<ObservationTable, WaveError>
where
    S: EpisodeSequence + ?Sized,
{
    config.validate()?;

    // --- Schema ---
    let years = table.int_column(config.year_col())?;
    let days = table.int_column(config.day_col())?;
    let values = table.float_column(config.measure())?;

    // --- Preconditions ---
    let groups = YearDays::group(years, days)?;

    // --- Thresholds from the untouched input ---
    let thresholds = DayThresholds::resolve(days, &values, config.threshold());

    // --- Scan ---
    let direction = config.direction();
    let scanned: Vec<Vec<Run>> = if config.parallel() {
        groups
            .par_iter()
            .map(|year| scan_year(year, &values, &thresholds, direction))
            .collect()
    } else {
        groups
            .iter()
            .map(|year| scan_year(year, &values, &thresholds, direction))
            .collect()
    };

    // --- Number runs and merge ---
    let n = table.n_rows();
    let mut flags = vec![0i64; n];
    let mut episodes = vec![0i64; n];
    for (year, runs) in groups.iter().zip(scanned.iter()) {
        if config.scope() == EpisodeScope::PerYear {
            sequence.reset();
        }
        for run in runs {
            let id = sequence.next_id();
            for &row in run {
                flags[row] = 1;
                episodes[row] = id;
            }
        }
        debug!(
            year = year.year(),
            n_days = year.len(),
            n_runs = runs.len(),
            "year scanned"
        );
    }

    let mut out = table.clone();
    out.set_column(config.flag_col(), Column::Int(flags))?;
    out.set_column(config.episode_col(), Column::Int(episodes))?;
    Ok(out)
}

/// Scans one year and returns its flagged runs.
fn scan_year(
    year: &YearDays,
    values: &[f64],
    thresholds: &DayThresholds,
    direction: Direction,
) -> Vec<Run> {
    let mut state = RunState::default();
    let mut runs: Vec<Run> = Vec::new();

    for &(day, row) in year.entries() {
        let threshold = thresholds.get(day);
        if is_episode_day(year, values, day, threshold, direction) {
            if !state.in_run {
                runs.push(Vec::new());
                state.in_run = true;
            }
            if let Some(run) = runs.last_mut() {
                run.push(row);
            }
        } else {
            state.in_run = false;
        }
    }

    runs
}
