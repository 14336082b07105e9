use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Thermowave extreme-temperature episode detector.
#[derive(Parser)]
#[command(
    name = "thermowave",
    version,
    about = "Heatwave, coldwave and thermal-amplitude episode detection"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Flag heatwave, coldwave and thermal-amplitude episodes in a CSV table.
    Detect(DetectArgs),
    /// Add a humidex column to a CSV table.
    Humidex(HumidexArgs),
}

/// Arguments for the `detect` subcommand.
#[derive(clap::Args)]
pub struct DetectArgs {
    /// Path to TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override episode summary JSON path from config.
    #[arg(short, long)]
    pub summary: Option<PathBuf>,

    /// Override episode id scope: "global" or "per-year".
    #[arg(long)]
    pub scope: Option<String>,

    /// Scan years in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `humidex` subcommand.
#[derive(clap::Args)]
#[command(group(ArgGroup::new("moisture").required(true).args(["dewpoint", "humidity"])))]
pub struct HumidexArgs {
    /// Path to input CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for output CSV file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Air temperature column (degrees Celsius).
    #[arg(long)]
    pub temp: String,

    /// Dew point column (degrees Celsius).
    #[arg(long)]
    pub dewpoint: Option<String>,

    /// Relative humidity column (percent).
    #[arg(long)]
    pub humidity: Option<String>,

    /// Name of the humidex column to add.
    #[arg(long, default_value = "humidex")]
    pub column: String,
}
