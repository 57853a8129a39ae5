use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agriweather",
    version,
    about = "Irrigation planning from crop coefficients and weather forecasts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override data directory (default export location)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive setup
    Init,
    /// Validate config and forecast input
    Check {
        /// Forecast file (YAML or JSON)
        #[arg(short, long)]
        forecast: Option<PathBuf>,
    },
    /// List crops with their stage coefficients
    Crops,
    /// Compute the daily irrigation schedule over a forecast
    Schedule(ScheduleArgs),
    /// Compute the current gross irrigation requirement
    Requirement(RequirementArgs),
    /// Show water-use analytics for a timeframe
    Analytics(AnalyticsArgs),
}

/// Crop selection shared by calculation commands; unset values come from config
#[derive(Args, Debug, Clone, Default)]
pub struct CropArgs {
    /// Crop name (e.g. Almonds)
    #[arg(long)]
    pub crop: Option<String>,

    /// Growth stage label (e.g. "Mid-season (Flowering)")
    #[arg(long)]
    pub stage: Option<String>,

    /// Irrigation system efficiency in percent
    #[arg(long)]
    pub efficiency: Option<f64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: table, csv, json or markdown
    #[arg(long, default_value = "table")]
    pub format: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write to the configured export directory using a generated file name
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub crop: CropArgs,

    /// Forecast file (YAML or JSON)
    #[arg(short, long)]
    pub forecast: Option<PathBuf>,

    /// Scheduling policy: cadence (every third day) or balance (soil moisture)
    #[arg(long, default_value = "cadence")]
    pub policy: String,

    /// Skip input validation and compute with whatever numbers are given
    #[arg(long)]
    pub permissive: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RequirementArgs {
    #[command(flatten)]
    pub crop: CropArgs,

    /// Reference evapotranspiration (mm/day); defaults to today's forecast value
    #[arg(long)]
    pub eto: Option<f64>,

    /// Forecast file used when --eto is not given
    #[arg(short, long)]
    pub forecast: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyticsArgs {
    /// Timeframe label: "Last 30 Days", "Last 60 Days" or "Last 90 Days"
    #[arg(short, long, default_value = "Last 30 Days")]
    pub timeframe: String,

    #[command(flatten)]
    pub output: OutputArgs,
}
