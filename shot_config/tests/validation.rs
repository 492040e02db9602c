use shot_config::{load_shot_toml, load_toml};

#[test]
fn rejects_unknown_log_level() {
    let toml = r#"
[feedback]
show_shot_feedback = true

[logging]
level = "loud"
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject level=loud");
    assert!(format!("{err}").to_lowercase().contains("logging.level"));
}

#[test]
fn rejects_unknown_rotation() {
    let toml = r#"
[logging]
file = "shot.log"
rotation = "weekly"
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject rotation=weekly");
    assert!(format!("{err}").contains("never|daily|hourly"));
}

#[test]
fn accepts_full_config() {
    let toml = r#"
[feedback]
show_shot_feedback = false
roast_type_tips = true

[logging]
file = "shot.log"
level = "DEBUG"
rotation = "daily"
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("valid config should pass");
    assert!(!cfg.feedback.show_shot_feedback);
    assert!(cfg.feedback.roast_type_tips);
}

#[test]
fn shot_file_requires_has_scale() {
    let toml = r#"
[shot]
dose_g = 18.0
actual_yield_g = 36.0
"#;
    let err = load_shot_toml(toml).expect_err("has_scale is mandatory");
    assert!(format!("{err}").contains("has_scale"));
}

#[test]
fn shot_file_rejects_negative_measure() {
    let toml = r#"
[shot]
dose_g = -18.0
actual_yield_g = 36.0
has_scale = true
"#;
    let shot = load_shot_toml(toml).expect("parse TOML");
    let err = shot.validate().expect_err("negative dose");
    assert!(format!("{err}").contains("shot.dose_g must be >= 0"));
}

#[test]
fn shot_file_with_advanced_section() {
    let toml = r#"
[shot]
dose_g = 18.0
target_yield_g = 36.0
actual_yield_g = 36.5
target_time_s = 30.0
actual_time_s = 29.0
has_scale = true
roast_level = "light"

[advanced]
peak_pressure_bar = 9.0
suspected_channeling = false
"#;
    let shot = load_shot_toml(toml).expect("parse TOML");
    shot.validate().expect("valid shot");
    let adv = shot.advanced.expect("advanced present");
    assert_eq!(adv.peak_pressure_bar, Some(9.0));
    assert_eq!(adv.time_to_first_drip_s, None);
    assert_eq!(shot.shot.roast_level.as_deref(), Some("light"));
}
