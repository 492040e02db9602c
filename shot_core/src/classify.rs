//! Placement of a shot on the extraction and strength axes.

use crate::roast::Tolerance;
use crate::types::{Positive, ShotSummary, TargetRatio};

/// Extraction axis, read off the shot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionLevel {
    /// Ran fast; likely under-extracted.
    Fast,
    OnTarget,
    /// Ran slow; likely over-extracted.
    Slow,
}

impl ExtractionLevel {
    pub fn describe(self) -> &'static str {
        match self {
            ExtractionLevel::Fast => "Likely under-extracted (fast shot).",
            ExtractionLevel::Slow => "Likely over-extracted (long shot).",
            ExtractionLevel::OnTarget => "Extraction is close to target.",
        }
    }
}

/// Strength axis, read off the brew ratio. A higher ratio is more liquid per
/// gram of coffee, hence weaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    Weak,
    OnTarget,
    Strong,
}

impl StrengthLevel {
    pub fn describe(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "On the weaker / more watery side.",
            StrengthLevel::Strong => "On the stronger / more concentrated side.",
            StrengthLevel::OnTarget => "Strength is close to target.",
        }
    }
}

/// Derived numbers for one shot against one tolerance band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub actual_ratio: f64,
    pub target_ratio: Option<f64>,
    /// `(actual - target) / target` for time; 0 when either time is missing.
    pub time_diff_rel: f64,
    /// `(actual - target) / target` for ratio; 0 when no target ratio.
    pub ratio_diff_rel: f64,
    pub within_time: bool,
    pub within_ratio: bool,
    pub extraction: ExtractionLevel,
    pub strength: StrengthLevel,
}

impl Assessment {
    /// Dose and actual yield are passed separately: the caller has already
    /// proven they are present.
    pub fn of(shot: &ShotSummary, dose: Positive, actual_yield: Positive, tol: Tolerance) -> Self {
        let dose = dose.get();
        let actual_ratio = actual_yield.get() / dose;
        let target_ratio = match shot.target_ratio {
            TargetRatio::Given(r) => Some(r.get()),
            TargetRatio::Off => None,
            TargetRatio::FromYield => shot.target_yield_g.map(|y| y.get() / dose),
        };

        let time_diff_rel = match (shot.target_time_s, shot.actual_time_s) {
            (Some(target), Some(actual)) => (actual.get() - target.get()) / target.get(),
            _ => 0.0,
        };
        let ratio_diff_rel = target_ratio.map_or(0.0, |t| (actual_ratio - t) / t);

        let within_time = shot.target_time_s.is_none() || time_diff_rel.abs() <= tol.time;
        let within_ratio = target_ratio.is_none() || ratio_diff_rel.abs() <= tol.ratio;

        let extraction = if within_time {
            ExtractionLevel::OnTarget
        } else if time_diff_rel < 0.0 {
            ExtractionLevel::Fast
        } else if time_diff_rel > 0.0 {
            ExtractionLevel::Slow
        } else {
            ExtractionLevel::OnTarget
        };

        let strength = if within_ratio {
            StrengthLevel::OnTarget
        } else if ratio_diff_rel > 0.0 {
            StrengthLevel::Weak
        } else if ratio_diff_rel < 0.0 {
            StrengthLevel::Strong
        } else {
            StrengthLevel::OnTarget
        };

        Self {
            actual_ratio,
            target_ratio,
            time_diff_rel,
            ratio_diff_rel,
            within_time,
            within_ratio,
            extraction,
            strength,
        }
    }

    #[inline]
    pub fn on_target(&self) -> bool {
        self.within_time && self.within_ratio
    }
}
