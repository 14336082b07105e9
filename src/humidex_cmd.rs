//! Humidex command: add a humidex column to a CSV table.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use thermowave_humidex::{with_humidex, with_humidex_from_humidity};
use thermowave_io::{ReaderConfig, WriterConfig, read_csv, write_csv};

use crate::cli::HumidexArgs;

/// Run the humidex computation.
pub fn run(args: HumidexArgs) -> Result<()> {
    let _cmd = info_span!("humidex").entered();

    info!(path = %args.input.display(), "reading observations");
    let table = read_csv(&args.input, &ReaderConfig::default())
        .with_context(|| format!("failed to read CSV: {}", args.input.display()))?;

    let table = match (&args.dewpoint, &args.humidity) {
        (Some(td), None) => with_humidex(&table, &args.temp, td, &args.column),
        (None, Some(rh)) => with_humidex_from_humidity(&table, &args.temp, rh, &args.column),
        _ => bail!("exactly one of --dewpoint or --humidity is required"),
    }
    .context("failed to compute humidex")?;

    write_csv(&args.output, &table, &WriterConfig::default())
        .with_context(|| format!("failed to write CSV: {}", args.output.display()))?;
    info!(path = %args.output.display(), column = %args.column, "humidex written");

    Ok(())
}
