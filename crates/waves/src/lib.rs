//! Detection of persistent extreme-temperature episodes.
//!
//! A day is an episode day when its measure breaches a per-day threshold
//! and it sits in a breaching run of at least three consecutive days that
//! starts or ends on it. Consecutive episode days within a year form an
//! episode and share an id.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  threshold    │────▶│  scan          │────▶│    number        │
//!  │  (±15 days)   │     │  (per year)    │     │  (sequence ids)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use thermowave_table::{Column, ObservationTable};
//! use thermowave_waves::{ThresholdSpec, WaveConfig, get_heatwave};
//!
//! let table = ObservationTable::from_columns([
//!     ("year", Column::Int(vec![2003; 6])),
//!     ("doy", Column::Int((200..206).collect())),
//!     ("tasmax", Column::Float(vec![28.0, 28.0, 37.0, 38.5, 39.0, 36.0])),
//! ])
//! .unwrap();
//!
//! let config = WaveConfig::heatwave().with_threshold(ThresholdSpec::Fixed(35.0));
//! let annotated = get_heatwave(&table, &config).unwrap();
//!
//! assert_eq!(annotated.int_column("heatwave").unwrap(), &[0, 0, 1, 1, 1, 1]);
//! assert_eq!(annotated.int_column("heatwave_id").unwrap(), &[0, 0, 1, 1, 1, 1]);
//! ```

pub mod classify;
pub mod config;
pub mod direction;
pub mod error;
pub mod extract;
pub mod presence;
pub mod scan;
pub mod sequence;
pub mod severity;
pub mod summary;
pub mod threshold;

pub use classify::is_episode_day;
pub use config::{DEFAULT_HALF_WIDTH, ThresholdSpec, WaveConfig};
pub use direction::Direction;
pub use error::WaveError;
pub use extract::{
    get_coldwave, get_heatwave, get_thermal_amplitude_wave, with_thermal_amplitude,
};
pub use presence::{YearDays, has_3day_run, has_day};
pub use scan::{extract_waves, extract_waves_with};
pub use sequence::{EpisodeCounter, EpisodeScope, EpisodeSequence};
pub use severity::{SeverityTiers, Tier};
pub use summary::{EpisodeSummary, summarize_episodes};
pub use threshold::{DayThresholds, window_threshold};
