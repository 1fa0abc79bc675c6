//! # Supervisor configuration.
//!
//! Provides [`Config`], the small set of knobs the supervisor carries.
//! The core drain semantics have no tunables; configuration only covers the
//! graceful-shutdown window and the event bus.
//!
//! ## Field semantics
//! - `grace`: default wait used by [`Supervisor::drain_graceful`](crate::Supervisor::drain_graceful)
//! - `bus_capacity`: event bus ring buffer size (min 1; clamped by the bus)

use std::time::Duration;

/// Configuration for a [`Supervisor`](crate::Supervisor).
///
/// All fields are public; [`Config::default`] is a reasonable baseline.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum time [`Supervisor::drain_graceful`](crate::Supervisor::drain_graceful)
    /// waits for outstanding work before giving up with
    /// [`DrainError::GraceExceeded`](crate::DrainError::GraceExceeded).
    pub grace: Duration,

    /// Capacity of the event bus broadcast ring buffer.
    ///
    /// Subscribers that lag behind more than `bus_capacity` events observe
    /// `Lagged` and skip the oldest items. Minimum value is 1 (enforced by
    /// the bus).
    pub bus_capacity: usize,
}

impl Config {
    /// Returns the bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `grace = 60s` (reasonable graceful shutdown window)
    /// - `bus_capacity = 1024` (good baseline)
    fn default() -> Self {
        Self {
            grace: Duration::from_secs(60),
            bus_capacity: 1024,
        }
    }
}
