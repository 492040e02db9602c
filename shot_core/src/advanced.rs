//! Extra nuance drawn from machine telemetry.

use crate::types::{AdvancedMetrics, Positive, ShotSummary};

/// Peak pressure above which a long shot points at a choking puck.
pub const CHOKE_PRESSURE_BAR: f64 = 10.0;
/// First drips before this fraction of the target time count as "very early".
pub const EARLY_DRIP_FRACTION: f64 = 0.1;

pub const CHOKING_DETAIL: &str =
    "High pressure and long shot time suggest the puck may be choking. Try a coarser grind or slightly lower dose.";
pub const EARLY_DRIP_DETAIL: &str =
    "Very early first drips can point to a coarse grind or uneven puck prep.";
pub const CHANNELING_DETAIL: &str =
    "Channeling suspected. Focus on distribution and tamping before changing grind.";

/// First matching diagnostic sentence, if any.
///
/// A rule whose operands are missing simply does not match.
pub fn advanced_detail(
    advanced: Option<&AdvancedMetrics>,
    shot: &ShotSummary,
    tol_time: f64,
) -> Option<&'static str> {
    let advanced = advanced?;
    let target_time = shot.target_time_s.map(Positive::get);

    if let (Some(pressure), Some(target), Some(actual)) = (
        advanced.peak_pressure_bar,
        target_time,
        shot.actual_time_s,
    ) && pressure.get() > CHOKE_PRESSURE_BAR
        && actual.get() > target * (1.0 + tol_time)
    {
        return Some(CHOKING_DETAIL);
    }

    if let (Some(first_drip), Some(target)) = (advanced.time_to_first_drip_s, target_time)
        && first_drip.get() < target * EARLY_DRIP_FRACTION
    {
        return Some(EARLY_DRIP_DETAIL);
    }

    if advanced.suspected_channeling == Some(true) {
        return Some(CHANNELING_DETAIL);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_shot() -> ShotSummary {
        ShotSummary::new(true)
            .with_dose(18.0)
            .with_actual_yield(36.0)
            .with_target_time(30.0)
            .with_actual_time(40.0)
    }

    fn metrics(
        pressure: Option<f64>,
        drip: Option<f64>,
        channeling: Option<bool>,
    ) -> AdvancedMetrics {
        AdvancedMetrics {
            peak_pressure_bar: pressure.and_then(Positive::new),
            time_to_first_drip_s: drip.and_then(Positive::new),
            suspected_channeling: channeling,
        }
    }

    #[test]
    fn no_metrics_no_detail() {
        assert_eq!(advanced_detail(None, &long_shot(), 0.10), None);
        assert_eq!(
            advanced_detail(Some(&AdvancedMetrics::default()), &long_shot(), 0.10),
            None
        );
    }

    #[test]
    fn pressure_rule_wins_over_the_rest() {
        let m = metrics(Some(11.0), Some(1.0), Some(true));
        assert_eq!(advanced_detail(Some(&m), &long_shot(), 0.10), Some(CHOKING_DETAIL));
    }

    #[test]
    fn pressure_at_ten_bar_does_not_choke() {
        let m = metrics(Some(10.0), None, Some(true));
        assert_eq!(advanced_detail(Some(&m), &long_shot(), 0.10), Some(CHANNELING_DETAIL));
    }

    #[test]
    fn pressure_needs_a_long_shot() {
        let shot = long_shot().with_actual_time(31.0);
        let m = metrics(Some(12.0), Some(2.0), None);
        assert_eq!(advanced_detail(Some(&m), &shot, 0.10), Some(EARLY_DRIP_DETAIL));
    }

    #[test]
    fn early_drip_needs_target_time() {
        let shot = ShotSummary::new(true)
            .with_dose(18.0)
            .with_actual_yield(36.0)
            .with_actual_time(40.0);
        let m = metrics(Some(12.0), Some(1.0), None);
        assert_eq!(advanced_detail(Some(&m), &shot, 0.10), None);
    }

    #[test]
    fn channeling_only_when_flagged_true() {
        let shot = long_shot();
        assert_eq!(
            advanced_detail(Some(&metrics(None, None, Some(false))), &shot, 0.10),
            None
        );
        assert_eq!(
            advanced_detail(Some(&metrics(None, Some(5.0), Some(true))), &shot, 0.10),
            Some(CHANNELING_DETAIL)
        );
    }
}
