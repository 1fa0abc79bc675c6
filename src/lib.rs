//! # taskdrain
//!
//! **taskdrain** is a bounded-lifetime supervisor for background tasks.
//!
//! A host process spawns fire-and-forget background work over its lifetime
//! and, at shutdown, needs to wait until every in-flight unit has finished.
//! The [`Supervisor`] tracks how many units are outstanding and offers a
//! blocking `drain` that returns only once the count is observed at zero.
//!
//! ## Architecture
//! ```text
//!     Host ──── submit(work) ───► Supervisor
//!                                    │  outstanding += 1
//!                                    │  tokio::spawn(work + slot guard)
//!                                    ▼
//!                              ┌───────────┐
//!                              │ work unit │  (runs concurrently; may panic)
//!                              └─────┬─────┘
//!                                    │  slot guard drops on every exit path
//!                                    ▼
//!                              outstanding -= 1
//!                              wake.try_send(())     // dropped if one is parked
//!                                    │
//!     Host ──── drain() ◄────────────┘
//!               loop { outstanding == 0 ? return : wake.recv().await }
//!
//!     Every lifecycle step also publishes an Event on the Bus:
//!       Supervisor ── publish ──► Bus ──► attach() workers ──► Subscribe::on_event
//! ```
//!
//! ## Guarantees
//! - The increment happens strictly before the work unit is scheduled and
//!   before its eventual decrement.
//! - A work unit that panics still releases its slot; the panic is never
//!   surfaced through [`Supervisor::submit`] or [`Supervisor::drain`].
//! - The wake channel holds at most one pending token; completions under
//!   burst coalesce instead of queueing.
//! - When `drain` returns, the side effects of every previously submitted
//!   unit are visible to the drainer.
//!
//! ## Non-goals
//! No scheduling policy, no per-task cancellation or timeout, no result
//! propagation, no restart/retry, no concurrency cap. A host that wants
//! cancellation carries its own token inside the work unit.
//!
//! ## Features
//! | Area              | Description                                              | Key types                  |
//! |-------------------|----------------------------------------------------------|----------------------------|
//! | **Supervision**   | Track outstanding work; drain deterministically.         | [`Supervisor`]             |
//! | **Bounded drain** | Drain with a grace window; typed error on overrun.       | [`DrainError`]             |
//! | **Events**        | Observe lifecycle events (submit, finish, drain).        | [`Event`], [`EventKind`]   |
//! | **Subscribers**   | Hook event handlers (logging, metrics, custom).          | [`Subscribe`]              |
//! | **Configuration** | Grace window and bus capacity.                           | [`Config`]                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use taskdrain::{Config, Supervisor};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sup = Supervisor::new(Config::default());
//!     let done = Arc::new(AtomicUsize::new(0));
//!
//!     for _ in 0..8 {
//!         let done = Arc::clone(&done);
//!         sup.submit(async move {
//!             done.fetch_add(1, Ordering::Relaxed);
//!         });
//!     }
//!
//!     sup.drain().await;
//!     assert_eq!(done.load(Ordering::Relaxed), 8);
//!     assert_eq!(sup.outstanding(), 0);
//! }
//! ```
mod config;
mod core;
mod error;
mod events;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use core::Supervisor;
pub use error::DrainError;
pub use events::{Bus, Event, EventKind};
pub use subscribers::Subscribe;

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
