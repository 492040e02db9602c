//! The feedback decision: one pure call per shot.

use crate::advanced::advanced_detail;
use crate::classify::{Assessment, ExtractionLevel, StrengthLevel};
use crate::roast::roast_params;
use crate::types::{AdvancedMetrics, Feedback, FeedbackOptions, Severity, ShotSummary, TASTE_NOTE};

pub const MATCHED_MESSAGE: &str = "Shot matched the target recipe. Nice pull!";
pub const FAST_WEAK_MESSAGE: &str =
    "Shot ran fast and high-yield (weak). Try grinding finer and stopping a bit earlier.";
pub const FAST_STRONG_MESSAGE: &str =
    "Shot ran fast but quite strong. Try grinding slightly finer or allowing a bit more yield.";
pub const SLOW_STRONG_MESSAGE: &str =
    "Shot ran slow and low-yield (very strong). Try grinding coarser and letting it run a bit longer.";
pub const SLOW_WEAK_MESSAGE: &str =
    "Shot ran slow but still ended up fairly high-yield. Try grinding a touch coarser and aiming for a slightly lower yield.";
pub const WEAK_MESSAGE: &str =
    "Shot strength is on the weaker side. Try reducing yield slightly or grinding a bit finer.";
pub const STRONG_MESSAGE: &str =
    "Shot is quite strong. Try increasing yield a little or grinding a touch coarser.";
pub const DEVIATED_MESSAGE: &str =
    "Shot deviated from the target. Adjust grind or ratio and try again.";

/// Diagnose one shot.
///
/// Returns `None` when there is nothing trustworthy to judge: no scale, no
/// actual yield, or no dose. Any other input yields a complete card.
pub fn shot_feedback(
    shot: &ShotSummary,
    advanced: Option<&AdvancedMetrics>,
    options: Option<&FeedbackOptions>,
) -> Option<Feedback> {
    let (true, Some(dose), Some(actual_yield)) =
        (shot.has_scale, shot.dose_g, shot.actual_yield_g)
    else {
        tracing::trace!(
            has_scale = shot.has_scale,
            dose = shot.dose_g.is_some(),
            actual_yield = shot.actual_yield_g.is_some(),
            "not enough data for feedback"
        );
        return None;
    };

    let roast_aware = options.is_some_and(|o| o.roast_type_tips) && shot.roast_level.is_some();
    let params = roast_params(if roast_aware { shot.roast_level } else { None });
    let a = Assessment::of(shot, dose, actual_yield, params.tolerance);

    tracing::debug!(
        actual_ratio = a.actual_ratio,
        target_ratio = ?a.target_ratio,
        time_diff_rel = a.time_diff_rel,
        ratio_diff_rel = a.ratio_diff_rel,
        within_time = a.within_time,
        within_ratio = a.within_ratio,
        extraction = ?a.extraction,
        strength = ?a.strength,
        roast = ?shot.roast_level,
        roast_aware,
        "shot assessed"
    );

    let card = |severity: Severity,
                message: &'static str,
                extraction: &'static str,
                strength: &'static str| Feedback {
        message,
        extraction: Some(extraction),
        strength: Some(strength),
        detail: None,
        roast_note: params.note,
        severity,
        taste_note: TASTE_NOTE,
    };

    if a.on_target() {
        return Some(card(
            Severity::Success,
            MATCHED_MESSAGE,
            "Balanced extraction.",
            "Balanced strength.",
        ));
    }

    use ExtractionLevel as E;
    use StrengthLevel as S;
    let feedback = match (a.extraction, a.strength) {
        (E::Fast, S::Weak) => card(
            Severity::Warning,
            FAST_WEAK_MESSAGE,
            "Often perceived as sour / sharp.",
            "On the watery side.",
        ),
        (E::Fast, S::Strong) => card(
            Severity::Info,
            FAST_STRONG_MESSAGE,
            "Likely under-extracted.",
            "Quite intense.",
        ),
        (E::Slow, S::Strong) => card(
            Severity::Warning,
            SLOW_STRONG_MESSAGE,
            "Often perceived as bitter / harsh.",
            "Very concentrated.",
        ),
        (E::Slow, S::Weak) => card(
            Severity::Info,
            SLOW_WEAK_MESSAGE,
            "Leaning over-extracted.",
            "A bit thin for the shot time.",
        ),
        (E::OnTarget, S::Weak) => card(
            Severity::Info,
            WEAK_MESSAGE,
            a.extraction.describe(),
            "Watery / low strength.",
        ),
        (E::OnTarget, S::Strong) => card(
            Severity::Info,
            STRONG_MESSAGE,
            a.extraction.describe(),
            "High strength / muddy.",
        ),
        // Time off, ratio within. (OnTarget, OnTarget) cannot get here since an
        // out-of-band axis always has a level.
        (E::Fast | E::Slow | E::OnTarget, S::OnTarget) => Feedback {
            detail: advanced_detail(advanced, shot, params.tolerance.time),
            ..card(
                Severity::Info,
                DEVIATED_MESSAGE,
                a.extraction.describe(),
                a.strength.describe(),
            )
        },
    };
    Some(feedback)
}
