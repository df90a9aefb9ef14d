//! Startup resolution errors.

use thiserror::Error;

/// A required reference was not found at startup.
///
/// Terminal for the behavior instance: the host logs it once and skips
/// all per-tick logic from then on. There is no retry and no
/// re-resolution. All steady-state conditions (no valid surface point,
/// coincident positions) are not errors — they are silently retried on
/// the next tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("no entity tagged {tag:?} found; flee behavior disabled")]
    TargetNotFound { tag: String },
    #[error("navigation agent handle missing; flee behavior disabled")]
    MissingAgent,
    #[error("animator handle missing; flee behavior disabled")]
    MissingAnimator,
}
