use thiserror::Error;

/// Errors raised while turning caller records into engine inputs.
///
/// The engine itself never fails; "not enough data" is `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShotError {
    #[error("unknown roast level: {0:?} (expected light, medium or dark)")]
    UnknownRoast(String),
    #[error("invalid shot record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, ShotError>;
