//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use thermowave_io::{ReaderConfig, WriterConfig};
use thermowave_waves::{DEFAULT_HALF_WIDTH, EpisodeScope, ThresholdSpec, WaveConfig};

/// Parses an episode scope name into the corresponding enum variant.
pub fn parse_scope(s: &str) -> Result<EpisodeScope> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "global" => Ok(EpisodeScope::Global),
        "per-year" | "year" => Ok(EpisodeScope::PerYear),
        other => bail!("unknown episode scope: {other:?}"),
    }
}

/// Parses a single-character delimiter string into its byte.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => bail!("delimiter must be a single ASCII character, got {s:?}"),
    }
}

/// Resolves the threshold of an extractor section on top of its preset.
///
/// At most one of `percentile` or `fixed` may be set; `half_width` only
/// applies to percentile thresholds.
pub fn parse_threshold(t: &WaveToml, preset: ThresholdSpec) -> Result<ThresholdSpec> {
    let preset_half_width = match preset {
        ThresholdSpec::Windowed { half_width, .. } => half_width,
        ThresholdSpec::Fixed(_) => DEFAULT_HALF_WIDTH,
    };
    match (t.percentile, t.fixed) {
        (Some(_), Some(_)) => {
            bail!("threshold must have at most one of percentile or fixed, got both")
        }
        (Some(percentile), None) => Ok(ThresholdSpec::Windowed {
            percentile,
            half_width: t.half_width.unwrap_or(preset_half_width),
        }),
        (None, Some(v)) => {
            if t.half_width.is_some() {
                bail!("half_width has no effect on a fixed threshold");
            }
            Ok(ThresholdSpec::Fixed(v))
        }
        (None, None) => Ok(match (preset, t.half_width) {
            (ThresholdSpec::Windowed { percentile, .. }, Some(half_width)) => {
                ThresholdSpec::Windowed {
                    percentile,
                    half_width,
                }
            }
            (ThresholdSpec::Fixed(_), Some(_)) => {
                bail!("half_width has no effect on a fixed threshold")
            }
            (spec, None) => spec,
        }),
    }
}

/// Builds a [`WaveConfig`] by applying a TOML section to `preset`.
///
/// Column names for year and day come from `[io]`; scope and parallelism
/// from `[episodes]`. The result is validated.
pub fn build_wave_config(
    section: &WaveToml,
    preset: WaveConfig,
    io: &IoConfig,
    episodes: &EpisodesToml,
) -> Result<WaveConfig> {
    let threshold = parse_threshold(section, preset.threshold())?;
    let mut cfg = preset
        .with_threshold(threshold)
        .with_year_col(&io.year_col)
        .with_day_col(&io.day_col)
        .with_scope(parse_scope(&episodes.scope)?)
        .with_parallel(episodes.parallel);
    if let Some(ref m) = section.measure {
        cfg = cfg.with_measure(m);
    }
    if let Some(ref f) = section.flag_col {
        cfg = cfg.with_flag_col(f);
    }
    if let Some(ref e) = section.episode_col {
        cfg = cfg.with_episode_col(e);
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> Result<ReaderConfig> {
    Ok(ReaderConfig::default()
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_missing_markers(io.missing_markers.iter().cloned()))
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoConfig) -> Result<WriterConfig> {
    Ok(WriterConfig::default()
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_float_precision(io.float_precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_names() {
        assert_eq!(parse_scope("global").unwrap(), EpisodeScope::Global);
        assert_eq!(parse_scope("per-year").unwrap(), EpisodeScope::PerYear);
        assert_eq!(parse_scope("PER_YEAR").unwrap(), EpisodeScope::PerYear);
        assert!(parse_scope("decade").is_err());
    }

    #[test]
    fn delimiters() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("\t").unwrap(), b'\t');
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn threshold_keeps_preset_when_unset() {
        let preset = ThresholdSpec::windowed(0.1);
        assert_eq!(
            parse_threshold(&WaveToml::default(), preset).unwrap(),
            preset
        );
    }

    #[test]
    fn threshold_overrides() {
        let section = WaveToml {
            percentile: Some(0.95),
            half_width: Some(7),
            ..WaveToml::default()
        };
        assert_eq!(
            parse_threshold(&section, ThresholdSpec::windowed(0.9)).unwrap(),
            ThresholdSpec::Windowed {
                percentile: 0.95,
                half_width: 7
            }
        );

        let fixed = WaveToml {
            fixed: Some(35.0),
            ..WaveToml::default()
        };
        assert_eq!(
            parse_threshold(&fixed, ThresholdSpec::windowed(0.9)).unwrap(),
            ThresholdSpec::Fixed(35.0)
        );
    }

    #[test]
    fn threshold_conflicts() {
        let both = WaveToml {
            percentile: Some(0.9),
            fixed: Some(35.0),
            ..WaveToml::default()
        };
        assert!(parse_threshold(&both, ThresholdSpec::windowed(0.9)).is_err());

        let fixed_with_width = WaveToml {
            half_width: Some(3),
            ..WaveToml::default()
        };
        assert!(parse_threshold(&fixed_with_width, ThresholdSpec::Fixed(15.0)).is_err());
    }

    #[test]
    fn wave_config_from_sections() {
        let section = WaveToml {
            measure: Some("MAX_AIR_TEMP".to_string()),
            flag_col: Some("hw".to_string()),
            ..WaveToml::default()
        };
        let io = IoConfig {
            day_col: "DAY365".to_string(),
            ..IoConfig::default()
        };
        let episodes = EpisodesToml {
            scope: "per-year".to_string(),
            parallel: true,
        };
        let cfg = build_wave_config(&section, WaveConfig::heatwave(), &io, &episodes).unwrap();
        assert_eq!(cfg.measure(), "MAX_AIR_TEMP");
        assert_eq!(cfg.day_col(), "DAY365");
        assert_eq!(cfg.flag_col(), "hw");
        assert_eq!(cfg.episode_col(), "heatwave_id");
        assert_eq!(cfg.scope(), EpisodeScope::PerYear);
        assert!(cfg.parallel());
    }

    #[test]
    fn wave_config_is_validated() {
        let section = WaveToml {
            percentile: Some(1.5),
            ..WaveToml::default()
        };
        let result = build_wave_config(
            &section,
            WaveConfig::heatwave(),
            &IoConfig::default(),
            &EpisodesToml::default(),
        );
        assert!(result.is_err());
    }
}
