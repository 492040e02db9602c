//! Input and output records of the feedback engine.

use crate::error::ShotError;
use std::fmt;
use std::str::FromStr;

/// A strictly positive, non-NaN measurement.
///
/// Zero, negative and NaN readings cannot be represented; they are "absent".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Positive(f64);

impl Positive {
    #[inline]
    pub fn new(v: f64) -> Option<Self> {
        (v > 0.0).then_some(Self(v))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Roast level declared by the user for the beans in this shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoastLevel {
    Light,
    Medium,
    Dark,
}

impl RoastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RoastLevel::Light => "light",
            RoastLevel::Medium => "medium",
            RoastLevel::Dark => "dark",
        }
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoastLevel {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(RoastLevel::Light),
            "medium" => Ok(RoastLevel::Medium),
            "dark" => Ok(RoastLevel::Dark),
            _ => Err(ShotError::UnknownRoast(s.to_string())),
        }
    }
}

/// Target brew ratio (yield over dose) as the caller gave it.
///
/// A ratio that was given but is zero, negative or NaN switches the strength
/// axis off instead of falling back to the target yield.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TargetRatio {
    /// Not given; derived from `target_yield_g / dose_g` when both exist.
    #[default]
    FromYield,
    /// Given but unusable: no ratio target at all.
    Off,
    Given(Positive),
}

impl TargetRatio {
    /// Classify a raw reading. `None` means the field was not given.
    pub fn from_reading(v: Option<f64>) -> Self {
        match v {
            None => TargetRatio::FromYield,
            Some(r) => Positive::new(r).map_or(TargetRatio::Off, TargetRatio::Given),
        }
    }
}

/// Everything known about one pull. Built fresh by the caller for each call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotSummary {
    pub dose_g: Option<Positive>,
    pub target_yield_g: Option<Positive>,
    pub actual_yield_g: Option<Positive>,
    pub target_time_s: Option<Positive>,
    pub actual_time_s: Option<Positive>,
    pub target_ratio: TargetRatio,
    /// Whether the yield reading can be trusted at all.
    pub has_scale: bool,
    pub roast_level: Option<RoastLevel>,
}

impl ShotSummary {
    pub fn new(has_scale: bool) -> Self {
        Self {
            has_scale,
            ..Self::default()
        }
    }

    pub fn with_dose(mut self, g: f64) -> Self {
        self.dose_g = Positive::new(g);
        self
    }

    pub fn with_target_yield(mut self, g: f64) -> Self {
        self.target_yield_g = Positive::new(g);
        self
    }

    pub fn with_actual_yield(mut self, g: f64) -> Self {
        self.actual_yield_g = Positive::new(g);
        self
    }

    pub fn with_target_time(mut self, s: f64) -> Self {
        self.target_time_s = Positive::new(s);
        self
    }

    pub fn with_actual_time(mut self, s: f64) -> Self {
        self.actual_time_s = Positive::new(s);
        self
    }

    pub fn with_target_ratio(mut self, r: f64) -> Self {
        self.target_ratio = TargetRatio::from_reading(Some(r));
        self
    }

    pub fn with_roast(mut self, roast: RoastLevel) -> Self {
        self.roast_level = Some(roast);
        self
    }
}

/// Optional machine telemetry; only consulted when no grid cell matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedMetrics {
    pub peak_pressure_bar: Option<Positive>,
    pub time_to_first_drip_s: Option<Positive>,
    pub suspected_channeling: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackOptions {
    /// Roast-aware tolerances plus a roast note on every card.
    pub roast_type_tips: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Info,
    Warning,
}

impl Severity {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }

    /// Accent class a front-end paints the card with.
    pub fn accent(self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Info => "alert-info",
            Severity::Warning => "alert-warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closing remark carried by every feedback card.
pub const TASTE_NOTE: &str = "Ultimately, it's down to taste – enjoy ☕️";

/// Diagnosis for one shot. Every text is a fixed sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: &'static str,
    pub extraction: Option<&'static str>,
    pub strength: Option<&'static str>,
    pub detail: Option<&'static str>,
    pub roast_note: Option<&'static str>,
    pub severity: Severity,
    pub taste_note: &'static str,
}

impl Feedback {
    /// Card lines in display order; absent fields are skipped.
    pub fn lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.message)
            .chain(self.extraction)
            .chain(self.strength)
            .chain(self.roast_note)
            .chain(self.detail)
            .chain(std::iter::once(self.taste_note))
    }
}
