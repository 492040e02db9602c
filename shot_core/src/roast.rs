//! Roast-aware tolerance bands.
//!
//! Light roasts get a wider band and dark roasts a narrower one.

use crate::types::RoastLevel;

/// Relative deviation accepted on each axis, inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub time: f64,
    pub ratio: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            time: 0.10,
            ratio: 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoastParams {
    pub tolerance: Tolerance,
    pub note: Option<&'static str>,
}

pub const LIGHT_NOTE: &str =
    "Light roasts often benefit from slightly longer ratios or finer grinds to tame sharp acidity.";
pub const MEDIUM_NOTE: &str =
    "Medium roasts are versatile; small grind or yield tweaks usually go a long way.";
pub const DARK_NOTE: &str =
    "Dark roasts can over-extract quickly; shorter shots or coarser grinds often taste better.";

/// Tolerances and roast note for a shot.
///
/// `None` means roast-aware mode is off (or no roast was declared): default
/// band, no note.
pub fn roast_params(roast: Option<RoastLevel>) -> RoastParams {
    match roast {
        None => RoastParams {
            tolerance: Tolerance::default(),
            note: None,
        },
        Some(RoastLevel::Light) => RoastParams {
            tolerance: Tolerance {
                time: 0.15,
                ratio: 0.15,
            },
            note: Some(LIGHT_NOTE),
        },
        Some(RoastLevel::Medium) => RoastParams {
            tolerance: Tolerance::default(),
            note: Some(MEDIUM_NOTE),
        },
        Some(RoastLevel::Dark) => RoastParams {
            tolerance: Tolerance {
                time: 0.08,
                ratio: 0.08,
            },
            note: Some(DARK_NOTE),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 0.10, false)]
    #[case(Some(RoastLevel::Light), 0.15, true)]
    #[case(Some(RoastLevel::Medium), 0.10, true)]
    #[case(Some(RoastLevel::Dark), 0.08, true)]
    fn table(#[case] roast: Option<RoastLevel>, #[case] tol: f64, #[case] has_note: bool) {
        let p = roast_params(roast);
        assert_eq!(p.tolerance.time, tol);
        assert_eq!(p.tolerance.ratio, tol);
        assert_eq!(p.note.is_some(), has_note);
    }
}
