//! Error types for the drain operations.
//!
//! The core operations (`submit`, `drain`) are infallible by contract; only
//! the grace-bounded drain variants can fail, and only by running out of
//! time. [`DrainError`] provides helper methods (`as_label`, `as_message`)
//! for logging/metrics.

use std::time::Duration;
use thiserror::Error;

/// # Errors produced by grace-bounded draining.
///
/// A timed-out drain leaves the supervisor fully usable: the remaining work
/// keeps running and the drain may be retried.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DrainError {
    /// The grace window elapsed while work units were still outstanding.
    #[error("drain grace {grace:?} exceeded; {outstanding} work units still running")]
    GraceExceeded {
        /// The grace duration that was exceeded.
        grace: Duration,
        /// Number of work units still outstanding when the window closed.
        outstanding: usize,
    },
}

impl DrainError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use taskdrain::DrainError;
    ///
    /// let err = DrainError::GraceExceeded { grace: Duration::from_secs(5), outstanding: 2 };
    /// assert_eq!(err.as_label(), "drain_grace_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DrainError::GraceExceeded { .. } => "drain_grace_exceeded",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DrainError::GraceExceeded { grace, outstanding } => {
                format!("grace exceeded after {grace:?}; outstanding={outstanding}")
            }
        }
    }
}
