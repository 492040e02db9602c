//! CLI argument definitions and the output-mode static.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "shot", version, about = "Espresso shot feedback")]
pub struct Cli {
    /// Path to config TOML (typed); defaults apply when the file is missing
    #[arg(long, value_name = "FILE", default_value = "etc/shot_config.toml")]
    pub config: PathBuf,

    /// Print feedback (and logs) as JSON instead of a text card
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Measurements of a single pull given on the command line.
#[derive(Args, Debug, Default)]
pub struct ShotArgs {
    /// Dry coffee in (grams)
    #[arg(long, value_name = "GRAMS")]
    pub dose: Option<f64>,
    /// Target beverage weight (grams)
    #[arg(long, value_name = "GRAMS")]
    pub target_yield: Option<f64>,
    /// Measured beverage weight (grams)
    #[arg(long, value_name = "GRAMS")]
    pub actual_yield: Option<f64>,
    /// Target shot time (seconds)
    #[arg(long, value_name = "SECS")]
    pub target_time: Option<f64>,
    /// Measured shot time (seconds)
    #[arg(long, value_name = "SECS")]
    pub actual_time: Option<f64>,
    /// Target brew ratio (yield / dose); overrides --target-yield
    #[arg(long, value_name = "RATIO")]
    pub target_ratio: Option<f64>,
    /// The yield was not measured on a scale
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_scale: bool,
    /// Roast level of the beans: light, medium or dark
    #[arg(long, value_name = "LEVEL")]
    pub roast: Option<String>,
    /// Peak brew pressure (bar)
    #[arg(long, value_name = "BAR")]
    pub peak_pressure: Option<f64>,
    /// Time until the first drips (seconds)
    #[arg(long, value_name = "SECS")]
    pub first_drip: Option<f64>,
    /// Channeling was observed
    #[arg(long, action = ArgAction::SetTrue)]
    pub channeling: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Judge a shot described by flags
    Check {
        #[command(flatten)]
        shot: ShotArgs,
        /// Roast-aware tolerances and notes (overrides the config)
        #[arg(long, action = ArgAction::SetTrue)]
        roast_tips: bool,
    },
    /// Judge a shot described in a TOML shot file
    File {
        /// Shot file ([shot] and optional [advanced] tables)
        #[arg(value_name = "SHOT_TOML")]
        path: PathBuf,
        /// Roast-aware tolerances and notes (overrides the config)
        #[arg(long, action = ArgAction::SetTrue)]
        roast_tips: bool,
    },
    /// Judge every row of a shot-history CSV
    History {
        /// CSV with headers id,volume,duration_ms,dose_in,dose_out,ratio,roast_level
        #[arg(value_name = "CSV")]
        path: PathBuf,
        /// Roast-aware tolerances and notes (overrides the config)
        #[arg(long, action = ArgAction::SetTrue)]
        roast_tips: bool,
    },
    /// Load and validate the config, then exit
    ConfigCheck,
}
