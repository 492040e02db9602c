//! Presentation of feedback cards: plain text or JSON.

use serde_json::{Value, json};
use shot_core::Feedback;

pub const NO_FEEDBACK: &str = "No feedback: need a scale reading, a yield and a dose.";
pub const DISABLED: &str = "Shot feedback is disabled";

/// Text card: accent tag on the first line, one indented line per extra field.
pub fn render_card(feedback: Option<&Feedback>) -> String {
    let Some(fb) = feedback else {
        return NO_FEEDBACK.to_string();
    };
    let tag = fb.severity.as_str().to_ascii_uppercase();
    let mut lines = fb.lines();
    let mut out = match lines.next() {
        Some(first) => format!("[{tag}] {first}"),
        None => format!("[{tag}]"),
    };
    for line in lines {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}

/// JSON object with every field present; absent optional fields are `null`.
pub fn feedback_json(feedback: Option<&Feedback>) -> Value {
    match feedback {
        None => json!({ "feedback": Value::Null }),
        Some(fb) => json!({
            "severity": fb.severity.as_str(),
            "accent": fb.severity.accent(),
            "message": fb.message,
            "extraction": fb.extraction,
            "strength": fb.strength,
            "roast_note": fb.roast_note,
            "detail": fb.detail,
            "taste_note": fb.taste_note,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shot_core::{ShotSummary, shot_feedback};

    #[test]
    fn card_starts_with_tag_and_ends_with_taste_note() {
        let shot = ShotSummary::new(true)
            .with_dose(18.0)
            .with_target_yield(36.0)
            .with_actual_yield(36.0);
        let fb = shot_feedback(&shot, None, None);
        let card = render_card(fb.as_ref());
        assert!(card.starts_with("[SUCCESS] Shot matched the target recipe."));
        assert!(card.ends_with(shot_core::TASTE_NOTE));
        assert_eq!(card.lines().count(), 4);
    }

    #[test]
    fn null_feedback_json() {
        assert_eq!(feedback_json(None), json!({ "feedback": null }));
        assert_eq!(render_card(None), NO_FEEDBACK);
    }
}
