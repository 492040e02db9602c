#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas, shot files and shot-history parsing for the feedback tool.
//!
//! - `Config` and its sections are deserialized from TOML and validated.
//! - `ShotFile` describes a single pull (targets, measurements, optional
//!   advanced metrics) in TOML.
//! - The history CSV loader enforces headers and yields `HistoryRecord`s,
//!   mirroring what a machine's shot log plus the user's notes contain.
//!
//! Everything here is plain data; interpretation lives in `shot_core`.
use serde::Deserialize;
use std::path::Path;

/// Headers the shot-history CSV must carry, in this order.
pub const HISTORY_HEADERS: [&str; 7] = [
    "id",
    "volume",
    "duration_ms",
    "dose_in",
    "dose_out",
    "ratio",
    "roast_level",
];

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const ROTATIONS: [&str; 3] = ["never", "daily", "hourly"];

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FeedbackPrefs {
    /// Global switch; when false the engine is never invoked.
    pub show_shot_feedback: bool,
    /// Roast-aware tolerances and roast commentary.
    pub roast_type_tips: bool,
}

impl Default for FeedbackPrefs {
    fn default() -> Self {
        Self {
            show_shot_feedback: true,
            roast_type_tips: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub feedback: FeedbackPrefs,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read and parse a config file. Validation is left to the caller.
pub fn load_config(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    load_toml(&text).map_err(|e| eyre::eyre!("invalid configuration in {:?}: {}", path, e))
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        if let Some(level) = self.logging.level.as_deref()
            && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        {
            eyre::bail!("logging.level must be one of error|warn|info|debug|trace, got '{level}'");
        }
        if let Some(rotation) = self.logging.rotation.as_deref()
            && !ROTATIONS.contains(&rotation.to_ascii_lowercase().as_str())
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly, got '{rotation}'");
        }
        if let Some(file) = self.logging.file.as_deref()
            && file.trim().is_empty()
        {
            eyre::bail!("logging.file must not be empty when set");
        }
        Ok(())
    }
}

/// Measured and targeted values of one pull, as written in a shot file.
///
/// Zero means "not measured"; the core treats it exactly like a missing key.
#[derive(Debug, Deserialize, Clone)]
pub struct ShotRecord {
    pub dose_g: Option<f64>,
    pub target_yield_g: Option<f64>,
    pub actual_yield_g: Option<f64>,
    pub target_time_s: Option<f64>,
    pub actual_time_s: Option<f64>,
    pub target_ratio: Option<f64>,
    pub has_scale: bool,
    pub roast_level: Option<String>,
}

/// Optional machine telemetry for a pull.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdvancedRecord {
    pub peak_pressure_bar: Option<f64>,
    pub time_to_first_drip_s: Option<f64>,
    pub suspected_channeling: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShotFile {
    pub shot: ShotRecord,
    #[serde(default)]
    pub advanced: Option<AdvancedRecord>,
}

pub fn load_shot_toml(s: &str) -> Result<ShotFile, toml::de::Error> {
    toml::from_str::<ShotFile>(s)
}

pub fn load_shot_file(path: &Path) -> eyre::Result<ShotFile> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read shot file {:?}: {}", path, e))?;
    load_shot_toml(&text).map_err(|e| eyre::eyre!("invalid shot file {:?}: {}", path, e))
}

fn check_measure(name: &str, v: Option<f64>) -> eyre::Result<()> {
    match v {
        Some(x) if !x.is_finite() => eyre::bail!("{name} must be a finite number"),
        Some(x) if x < 0.0 => eyre::bail!("{name} must be >= 0"),
        _ => Ok(()),
    }
}

impl ShotFile {
    pub fn validate(&self) -> eyre::Result<()> {
        let s = &self.shot;
        check_measure("shot.dose_g", s.dose_g)?;
        check_measure("shot.target_yield_g", s.target_yield_g)?;
        check_measure("shot.actual_yield_g", s.actual_yield_g)?;
        check_measure("shot.target_time_s", s.target_time_s)?;
        check_measure("shot.actual_time_s", s.actual_time_s)?;
        check_measure("shot.target_ratio", s.target_ratio)?;
        if let Some(adv) = &self.advanced {
            check_measure("advanced.peak_pressure_bar", adv.peak_pressure_bar)?;
            check_measure("advanced.time_to_first_drip_s", adv.time_to_first_drip_s)?;
        }
        Ok(())
    }
}

/// What the user wrote down about a pull.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotNotes {
    pub dose_in: Option<f64>,
    pub dose_out: Option<f64>,
    pub ratio: Option<f64>,
    pub roast_level: Option<String>,
}

/// One row of the shot log: what the machine recorded plus the user's notes.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub id: String,
    /// Beverage weight in grams; 0 or missing means no scale was attached.
    pub volume: Option<f64>,
    pub duration_ms: Option<u64>,
    pub notes: ShotNotes,
}

/// Raw CSV row; empty cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct HistoryRow {
    id: String,
    volume: Option<f64>,
    duration_ms: Option<u64>,
    dose_in: Option<f64>,
    dose_out: Option<f64>,
    ratio: Option<f64>,
    roast_level: Option<String>,
}

impl From<HistoryRow> for HistoryRecord {
    fn from(r: HistoryRow) -> Self {
        Self {
            id: r.id,
            volume: r.volume,
            duration_ms: r.duration_ms,
            notes: ShotNotes {
                dose_in: r.dose_in,
                dose_out: r.dose_out,
                ratio: r.ratio,
                roast_level: r.roast_level.filter(|s| !s.trim().is_empty()),
            },
        }
    }
}

pub fn load_history_csv(path: &Path) -> eyre::Result<Vec<HistoryRecord>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| eyre::eyre!("open history CSV {:?}: {}", path, e))?;
    read_history(rdr, path)
}

fn read_history<R: std::io::Read>(
    mut rdr: csv::Reader<R>,
    path: &Path,
) -> eyre::Result<Vec<HistoryRecord>> {
    // Enforce exact headers
    let headers = rdr
        .headers()
        .map_err(|e| eyre::eyre!("read CSV headers {:?}: {}", path, e))?
        .clone();
    let actual: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
    if actual != HISTORY_HEADERS {
        eyre::bail!(
            "history CSV must have headers '{}', got: {}",
            HISTORY_HEADERS.join(","),
            actual.join(",")
        );
    }

    let mut records = Vec::new();
    for (idx, rec) in rdr.deserialize::<HistoryRow>().enumerate() {
        match rec {
            Ok(row) => records.push(HistoryRecord::from(row)),
            Err(e) => {
                eyre::bail!("invalid CSV row {}: {}", idx + 2, e);
            }
        }
    }
    Ok(records)
}

/// Parse history CSV text already held in memory.
pub fn parse_history_csv(text: &str) -> eyre::Result<Vec<HistoryRecord>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    read_history(rdr, Path::new("<memory>"))
}
