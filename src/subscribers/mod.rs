//! Event subscribers.
//!
//! This module provides the [`Subscribe`] trait for plugging custom event
//! handlers into the supervisor, plus a built-in stdout logger behind the
//! `logging` feature.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Supervisor ── publish(Event) ──► Bus ──► attach() worker (one per subscriber)
//!                                                 │
//!                                                 ▼
//!                                       Subscribe::on_event(&Event)
//! ```
//!
//! ## Implementing custom subscribers
//! ```rust
//! use async_trait::async_trait;
//! use taskdrain::{Event, EventKind, Subscribe};
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl Subscribe for Metrics {
//!     async fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::WorkFinished {
//!             // increment completion counter
//!         }
//!     }
//! }
//! ```

mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
