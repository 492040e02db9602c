#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Any TOML text: parse, validate, convert and judge without panicking.
    let Ok(file) = shot_config::load_shot_toml(data) else {
        return;
    };
    if file.validate().is_err() {
        return;
    }
    if let Ok((summary, advanced)) = shot_core::conversions::from_shot_file(&file) {
        let tips = shot_core::FeedbackOptions {
            roast_type_tips: true,
        };
        let _ = shot_core::shot_feedback(&summary, advanced.as_ref(), Some(&tips));
        let _ = shot_core::shot_feedback(&summary, advanced.as_ref(), None);
    }

    // The same text as a config must never panic either.
    if let Ok(cfg) = toml::from_str::<shot_config::Config>(data) {
        let _ = cfg.validate();
    }
});
