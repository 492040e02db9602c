use proptest::prelude::*;
use shot_core::{
    AdvancedMetrics, FeedbackOptions, Positive, RoastLevel, Severity, ShotSummary, TASTE_NOTE,
    TargetRatio, shot_feedback,
};

// Readings include zero, negatives and NaN so the "absent" collapse is exercised.
fn reading() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        Just(Some(-5.0)),
        Just(Some(f64::NAN)),
        (0.1f64..120.0).prop_map(Some),
    ]
}

fn roast() -> impl Strategy<Value = Option<RoastLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(RoastLevel::Light)),
        Just(Some(RoastLevel::Medium)),
        Just(Some(RoastLevel::Dark)),
    ]
}

prop_compose! {
    fn shot_strategy()(
        dose in reading(),
        target_yield in reading(),
        actual_yield in reading(),
        target_time in reading(),
        actual_time in reading(),
        target_ratio in reading(),
        has_scale in any::<bool>(),
        roast_level in roast(),
    ) -> ShotSummary {
        ShotSummary {
            dose_g: dose.and_then(Positive::new),
            target_yield_g: target_yield.and_then(Positive::new),
            actual_yield_g: actual_yield.and_then(Positive::new),
            target_time_s: target_time.and_then(Positive::new),
            actual_time_s: actual_time.and_then(Positive::new),
            target_ratio: TargetRatio::from_reading(target_ratio),
            has_scale,
            roast_level,
        }
    }
}

prop_compose! {
    fn advanced_strategy()(
        pressure in reading(),
        drip in reading(),
        channeling in proptest::option::of(any::<bool>()),
    ) -> AdvancedMetrics {
        AdvancedMetrics {
            peak_pressure_bar: pressure.and_then(Positive::new),
            time_to_first_drip_s: drip.and_then(Positive::new),
            suspected_channeling: channeling,
        }
    }
}

proptest! {
    #[test]
    fn none_iff_missing_scale_yield_or_dose(
        shot in shot_strategy(),
        adv in proptest::option::of(advanced_strategy()),
        tips in any::<bool>(),
    ) {
        let opts = FeedbackOptions { roast_type_tips: tips };
        let fb = shot_feedback(&shot, adv.as_ref(), Some(&opts));
        let insufficient =
            !shot.has_scale || shot.actual_yield_g.is_none() || shot.dose_g.is_none();
        prop_assert_eq!(fb.is_none(), insufficient);

        if let Some(fb) = fb {
            prop_assert!(!fb.message.is_empty());
            prop_assert_eq!(fb.taste_note, TASTE_NOTE);
            prop_assert!(fb.extraction.is_some() && fb.strength.is_some());
            // Roast note iff roast-aware mode is active.
            prop_assert_eq!(fb.roast_note.is_some(), tips && shot.roast_level.is_some());
            // Detail only on the info-level fallback.
            if fb.detail.is_some() {
                prop_assert_eq!(fb.severity, Severity::Info);
                prop_assert!(fb.message.contains("deviated"));
            }
        }
    }

    #[test]
    fn identical_inputs_identical_output(
        shot in shot_strategy(),
        adv in proptest::option::of(advanced_strategy()),
        tips in any::<bool>(),
    ) {
        let opts = FeedbackOptions { roast_type_tips: tips };
        let first = shot_feedback(&shot, adv.as_ref(), Some(&opts));
        let second = shot_feedback(&shot.clone(), adv.clone().as_ref(), Some(&opts));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_options_equals_tips_off(shot in shot_strategy()) {
        let off = FeedbackOptions::default();
        prop_assert_eq!(
            shot_feedback(&shot, None, None),
            shot_feedback(&shot, None, Some(&off))
        );
    }
}
