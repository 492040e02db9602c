#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Espresso shot feedback (presentation-agnostic).
//!
//! This crate turns a measured shot into a short diagnosis and a suggested
//! correction. Nothing here performs I/O; callers build a `ShotSummary`,
//! call [`shot_feedback`], and render the returned [`Feedback`] verbatim.
//!
//! ## Architecture
//!
//! - **Types**: inputs, options and the feedback card (`types` module)
//! - **Roast**: roast-aware tolerance bands and notes (`roast` module)
//! - **Classification**: extraction and strength axes (`classify` module)
//! - **Decision**: the 3×3 grid and its fallback (`engine` module)
//! - **Advanced**: telemetry-based nuance for the fallback (`advanced` module)
//! - **Conversions**: config records and shot-history rows to engine inputs
//!
//! ## Example
//!
//! ```
//! use shot_core::{Severity, ShotSummary, shot_feedback};
//!
//! let shot = ShotSummary::new(true)
//!     .with_dose(18.0)
//!     .with_target_yield(36.0)
//!     .with_actual_yield(45.0)
//!     .with_target_time(30.0)
//!     .with_actual_time(22.0);
//! let fb = shot_feedback(&shot, None, None).unwrap();
//! assert_eq!(fb.severity, Severity::Warning);
//! assert!(fb.message.contains("fast and high-yield"));
//! ```

pub mod advanced;
pub mod classify;
pub mod conversions;
pub mod engine;
pub mod error;
pub mod roast;
pub mod types;

pub use classify::{Assessment, ExtractionLevel, StrengthLevel};
pub use engine::shot_feedback;
pub use error::ShotError;
pub use roast::{RoastParams, Tolerance, roast_params};
pub use types::{
    AdvancedMetrics, Feedback, FeedbackOptions, Positive, RoastLevel, Severity, ShotSummary,
    TASTE_NOTE, TargetRatio,
};
