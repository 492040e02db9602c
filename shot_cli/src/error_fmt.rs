//! Human-readable error descriptions and structured JSON error formatting.

use shot_core::ShotError;

/// Exit code for an unrecognised roast level.
pub const EXIT_UNKNOWN_ROAST: i32 = 3;
/// Exit code for an invalid config, shot file, history CSV or record.
pub const EXIT_INVALID_INPUT: i32 = 4;

/// Untyped failures, told apart by the prefix of the outermost message only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Unreadable,
    CsvHeaders,
    CsvRow,
    Config,
    ShotFile,
    Other,
}

const PREFIXES: [(&str, Kind); 8] = [
    ("read config", Kind::Unreadable),
    ("read shot file", Kind::Unreadable),
    ("open history csv", Kind::Unreadable),
    ("read csv headers", Kind::Unreadable),
    ("history csv must have headers", Kind::CsvHeaders),
    ("invalid csv row", Kind::CsvRow),
    ("invalid configuration", Kind::Config),
    ("invalid shot file", Kind::ShotFile),
];

fn classify(err: &eyre::Report) -> Kind {
    let head = err.to_string().to_ascii_lowercase();
    PREFIXES
        .iter()
        .find(|(prefix, _)| head.starts_with(prefix))
        .map_or(Kind::Other, |&(_, kind)| kind)
}

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(se) = err.downcast_ref::<ShotError>() {
        return match se {
            ShotError::UnknownRoast(raw) => format!(
                "What happened: Unknown roast level {raw:?}.\nLikely causes: Typo in --roast or in the roast_level column/key.\nHow to fix: Use one of light, medium or dark (case-insensitive), or leave it empty."
            ),
            ShotError::InvalidRecord(msg) => format!(
                "What happened: A shot record is invalid ({msg}).\nLikely causes: Negative or non-numeric measurements in the input.\nHow to fix: Correct the value; use 0 or leave it empty when it was not measured."
            ),
        };
    }

    let msg = format!("{err:#}");
    match classify(err) {
        Kind::Unreadable => {
            return format!(
                "What happened: An input file could not be read.\nLikely causes: Wrong path or missing permissions.\nHow to fix: Check the path and rerun. Details: {msg}"
            );
        }
        Kind::CsvHeaders => {
            return format!(
                "Invalid headers in history CSV. Expected '{}'.",
                shot_config::HISTORY_HEADERS.join(",")
            );
        }
        Kind::CsvRow => {
            return format!(
                "What happened: A history CSV row could not be parsed.\nLikely causes: Non-numeric value in a numeric column.\nHow to fix: Fix the row and rerun. Details: {msg}"
            );
        }
        Kind::Config => {
            return format!(
                "What happened: Configuration is invalid.\nLikely causes: Unknown value or wrong type in the TOML.\nHow to fix: Edit the config file, then rerun. Details: {msg}"
            );
        }
        Kind::ShotFile => {
            return format!(
                "What happened: Shot file is invalid.\nLikely causes: Missing [shot] table, missing has_scale, or a negative measurement.\nHow to fix: Edit the shot file, then rerun. Details: {msg}"
            );
        }
        Kind::Other => {}
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Map typed errors to stable exit codes; everything else returns 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if let Some(se) = err.downcast_ref::<ShotError>() {
        return match se {
            ShotError::UnknownRoast(_) => EXIT_UNKNOWN_ROAST,
            ShotError::InvalidRecord(_) => EXIT_INVALID_INPUT,
        };
    }
    match classify(err) {
        Kind::CsvHeaders | Kind::CsvRow | Kind::Config | Kind::ShotFile => EXIT_INVALID_INPUT,
        Kind::Unreadable | Kind::Other => 1,
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let reason = match err.downcast_ref::<ShotError>() {
        Some(ShotError::UnknownRoast(_)) => "UnknownRoast",
        Some(ShotError::InvalidRecord(_)) => "InvalidRecord",
        None if exit_code_for_error(err) == EXIT_INVALID_INPUT => "InvalidInput",
        None => "Error",
    };
    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
