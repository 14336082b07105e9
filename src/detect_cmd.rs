//! Detect command: flag extreme-temperature episodes in a CSV table.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use tracing::{debug_span, info, info_span};

use thermowave_io::{read_csv, write_csv, write_json};
use thermowave_table::ObservationTable;
use thermowave_waves::{
    EpisodeSummary, WaveConfig, WaveError, get_coldwave, get_heatwave, get_thermal_amplitude_wave,
    summarize_episodes, with_thermal_amplitude,
};

use crate::cli::DetectArgs;
use crate::config::ThermowaveConfig;
use crate::convert;

/// Signature shared by the three extractors.
type Extractor = fn(&ObservationTable, &WaveConfig) -> Result<ObservationTable, WaveError>;

/// Run the detection pipeline.
pub fn run(args: DetectArgs) -> Result<()> {
    let _cmd = info_span!("detect").entered();

    // 1. Load project TOML, then let CLI flags override it
    let mut config = match args.config {
        Some(ref path) => ThermowaveConfig::load(path)?,
        None => ThermowaveConfig::default(),
    };
    if let Some(input) = args.input {
        config.io.input = Some(input);
    }
    if let Some(output) = args.output {
        config.io.output = Some(output);
    }
    if let Some(summary) = args.summary {
        config.io.summary = Some(summary);
    }
    if let Some(scope) = args.scope {
        config.episodes.scope = scope;
    }
    if args.parallel {
        config.episodes.parallel = true;
    }

    let input = config
        .io
        .input
        .clone()
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config or use --input"))?;
    let output = config.io.output.clone().ok_or_else(|| {
        anyhow::anyhow!("no output path: set [io].output in config or use --output")
    })?;

    // 2. Build extractor configs before touching any file
    let mut plan: Vec<(&str, WaveConfig, Extractor)> = Vec::new();
    if config.heatwave.enabled.unwrap_or(true) {
        let cfg = convert::build_wave_config(
            &config.heatwave,
            WaveConfig::heatwave(),
            &config.io,
            &config.episodes,
        )
        .context("invalid [heatwave] section")?;
        plan.push(("heatwave", cfg, get_heatwave));
    }
    if config.coldwave.enabled.unwrap_or(true) {
        let cfg = convert::build_wave_config(
            &config.coldwave,
            WaveConfig::coldwave(),
            &config.io,
            &config.episodes,
        )
        .context("invalid [coldwave] section")?;
        plan.push(("coldwave", cfg, get_coldwave));
    }
    let amplitude = config.amplitude.wave();
    if amplitude.enabled.unwrap_or(false) {
        let cfg = convert::build_wave_config(
            &amplitude,
            WaveConfig::thermal_amplitude(),
            &config.io,
            &config.episodes,
        )
        .context("invalid [amplitude] section")?;
        plan.push(("amplitude", cfg, get_thermal_amplitude_wave));
    }
    if plan.is_empty() {
        bail!("all extractors are disabled");
    }

    // 3. Read observations
    let reader_cfg = convert::build_reader_config(&config.io)?;
    info!(path = %input.display(), "reading observations");
    let mut table = read_csv(&input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;

    // 4. Derive the amplitude column when asked to
    match (&config.amplitude.tmax, &config.amplitude.tmin) {
        (Some(tmax), Some(tmin)) => {
            let out = config
                .amplitude
                .measure
                .as_deref()
                .unwrap_or(WaveConfig::thermal_amplitude().measure())
                .to_string();
            table = with_thermal_amplitude(&table, tmax, tmin, &out)
                .context("failed to derive thermal amplitude")?;
            info!(column = %out, "thermal amplitude derived");
        }
        (None, None) => {}
        _ => bail!("[amplitude] needs both tmax and tmin to derive the amplitude column"),
    }

    // 5. Run extractors in order; each owns its own run state and ids
    let mut summaries: BTreeMap<&str, Vec<EpisodeSummary>> = BTreeMap::new();
    for (name, cfg, extract) in &plan {
        let _span = debug_span!("extractor", name = *name).entered();
        table = extract(&table, cfg).with_context(|| format!("{name} detection failed"))?;

        let episodes = summarize_episodes(&table, cfg)
            .with_context(|| format!("failed to summarise {name} episodes"))?;
        let n_days: usize = episodes.iter().map(|e| e.n_days).sum();
        info!(
            extractor = *name,
            n_episodes = episodes.len(),
            n_days,
            "episodes detected"
        );
        summaries.insert(*name, episodes);
    }

    // 6. Write outputs
    let writer_cfg = convert::build_writer_config(&config.io)?;
    write_csv(&output, &table, &writer_cfg)
        .with_context(|| format!("failed to write CSV: {}", output.display()))?;
    info!(path = %output.display(), n_rows = table.n_rows(), "annotated table written");

    if let Some(ref path) = config.io.summary {
        write_json(path, &summaries)
            .with_context(|| format!("failed to write summary: {}", path.display()))?;
    }

    Ok(())
}
