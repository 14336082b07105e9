use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level thermowave configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ThermowaveConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Heatwave extractor settings.
    #[serde(default)]
    pub heatwave: WaveToml,

    /// Coldwave extractor settings.
    #[serde(default)]
    pub coldwave: WaveToml,

    /// Thermal-amplitude extractor settings.
    #[serde(default)]
    pub amplitude: AmplitudeToml,

    /// Episode numbering settings.
    #[serde(default)]
    pub episodes: EpisodesToml,
}

impl ThermowaveConfig {
    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    #[serde(default = "default_year_col")]
    pub year_col: String,
    #[serde(default = "default_day_col")]
    pub day_col: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_missing_markers")]
    pub missing_markers: Vec<String>,
    #[serde(default)]
    pub float_precision: Option<usize>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            summary: None,
            year_col: default_year_col(),
            day_col: default_day_col(),
            delimiter: default_delimiter(),
            missing_markers: default_missing_markers(),
            float_precision: None,
        }
    }
}

fn default_year_col() -> String {
    "year".to_string()
}
fn default_day_col() -> String {
    "doy".to_string()
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_missing_markers() -> Vec<String> {
    vec!["NA".to_string(), "NaN".to_string(), "nan".to_string()]
}

/// One extractor section. Unset fields keep the extractor's preset.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WaveToml {
    pub enabled: Option<bool>,
    pub measure: Option<String>,
    pub percentile: Option<f64>,
    pub fixed: Option<f64>,
    pub half_width: Option<u32>,
    pub flag_col: Option<String>,
    pub episode_col: Option<String>,
}

/// The `[amplitude]` section. When `tmax` and `tmin` are both set the
/// amplitude column is derived from them before detection.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AmplitudeToml {
    pub enabled: Option<bool>,
    pub measure: Option<String>,
    pub percentile: Option<f64>,
    pub fixed: Option<f64>,
    pub half_width: Option<u32>,
    pub flag_col: Option<String>,
    pub episode_col: Option<String>,
    pub tmax: Option<String>,
    pub tmin: Option<String>,
}

impl AmplitudeToml {
    /// The extractor fields of this section.
    pub fn wave(&self) -> WaveToml {
        WaveToml {
            enabled: self.enabled,
            measure: self.measure.clone(),
            percentile: self.percentile,
            fixed: self.fixed,
            half_width: self.half_width,
            flag_col: self.flag_col.clone(),
            episode_col: self.episode_col.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpisodesToml {
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for EpisodesToml {
    fn default() -> Self {
        Self {
            scope: default_scope(),
            parallel: false,
        }
    }
}

fn default_scope() -> String {
    "global".to_string()
}
