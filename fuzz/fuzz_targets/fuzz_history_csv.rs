#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(records) = shot_config::parse_history_csv(data) else {
        return;
    };
    let tips = shot_core::FeedbackOptions {
        roast_type_tips: true,
    };
    for record in &records {
        if let Ok(summary) = shot_core::ShotSummary::try_from(record) {
            let _ = shot_core::shot_feedback(&summary, None, Some(&tips));
        }
    }
});
