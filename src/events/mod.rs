//! Lifecycle events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to lifecycle events emitted by the supervisor and by
//! completing work units.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — event classification and payload
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Supervisor` (submit/drain sites) and the slot guard
//!   that releases a finished work unit.
//! - **Consumers**: workers spawned by `Supervisor::attach`, plus any raw
//!   receiver obtained via `Supervisor::subscribe`.
//!
//! Events are observational only: dropping every receiver never changes the
//! supervisor's drain semantics.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
