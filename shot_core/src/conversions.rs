//! Conversions bridging `shot_config` records to engine inputs.
//!
//! Zero readings become "absent" through `Positive::new`. Negative or
//! non-finite readings are rejected here so the engine never sees them from a
//! file.

use crate::error::{Result, ShotError};
use crate::types::{AdvancedMetrics, Positive, RoastLevel, ShotSummary, TargetRatio};

const MILLIS_PER_SEC: f64 = 1_000.0;

fn measure(field: &str, v: Option<f64>) -> Result<Option<Positive>> {
    match v {
        Some(x) if !x.is_finite() || x < 0.0 => Err(ShotError::InvalidRecord(format!(
            "{field} must be a finite number >= 0, got {x}"
        ))),
        Some(x) => Ok(Positive::new(x)),
        None => Ok(None),
    }
}

/// A ratio of 0 was written down on purpose and turns the ratio target off.
fn ratio(field: &str, v: Option<f64>) -> Result<TargetRatio> {
    measure(field, v)?;
    Ok(TargetRatio::from_reading(v))
}

fn roast(v: Option<&str>) -> Result<Option<RoastLevel>> {
    v.filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<RoastLevel>())
        .transpose()
}

// ── Shot file ────────────────────────────────────────────────────────────────

impl TryFrom<&shot_config::ShotRecord> for ShotSummary {
    type Error = ShotError;

    fn try_from(r: &shot_config::ShotRecord) -> Result<Self> {
        Ok(Self {
            dose_g: measure("dose_g", r.dose_g)?,
            target_yield_g: measure("target_yield_g", r.target_yield_g)?,
            actual_yield_g: measure("actual_yield_g", r.actual_yield_g)?,
            target_time_s: measure("target_time_s", r.target_time_s)?,
            actual_time_s: measure("actual_time_s", r.actual_time_s)?,
            target_ratio: ratio("target_ratio", r.target_ratio)?,
            has_scale: r.has_scale,
            roast_level: roast(r.roast_level.as_deref())?,
        })
    }
}

impl TryFrom<&shot_config::AdvancedRecord> for AdvancedMetrics {
    type Error = ShotError;

    fn try_from(r: &shot_config::AdvancedRecord) -> Result<Self> {
        Ok(Self {
            peak_pressure_bar: measure("peak_pressure_bar", r.peak_pressure_bar)?,
            time_to_first_drip_s: measure("time_to_first_drip_s", r.time_to_first_drip_s)?,
            suspected_channeling: r.suspected_channeling,
        })
    }
}

/// Engine inputs for a whole shot file.
pub fn from_shot_file(
    file: &shot_config::ShotFile,
) -> Result<(ShotSummary, Option<AdvancedMetrics>)> {
    let summary = ShotSummary::try_from(&file.shot)?;
    let advanced = file
        .advanced
        .as_ref()
        .map(AdvancedMetrics::try_from)
        .transpose()?;
    Ok((summary, advanced))
}

// ── Shot history ─────────────────────────────────────────────────────────────

/// A logged shot has no target time; only the notes carry targets. A scale
/// was attached iff the machine recorded a positive beverage weight.
impl TryFrom<&shot_config::HistoryRecord> for ShotSummary {
    type Error = ShotError;

    fn try_from(r: &shot_config::HistoryRecord) -> Result<Self> {
        let volume = measure("volume", r.volume)?;
        let notes = &r.notes;
        Ok(Self {
            dose_g: measure("dose_in", notes.dose_in)?,
            target_yield_g: measure("dose_out", notes.dose_out)?,
            actual_yield_g: volume,
            target_time_s: None,
            actual_time_s: r
                .duration_ms
                .and_then(|ms| Positive::new(ms as f64 / MILLIS_PER_SEC)),
            target_ratio: ratio("ratio", notes.ratio)?,
            has_scale: volume.is_some(),
            roast_level: roast(notes.roast_level.as_deref())?,
        })
    }
}
