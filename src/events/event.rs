//! # Lifecycle events emitted by the supervisor.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Work events**: a unit was submitted or finished
//! - **Drain events**: a drain started, completed, or ran out of grace
//!
//! The [`Event`] struct carries a wall-clock timestamp and a snapshot of the
//! outstanding count taken at the publishing site.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order. Note that `outstanding` snapshots from racing
//! publishers are individually consistent but not mutually ordered.
//!
//! ## Example
//! ```rust
//! use taskdrain::{Event, EventKind};
//!
//! let a = Event::new(EventKind::WorkSubmitted, 1);
//! let b = Event::new(EventKind::WorkFinished, 0);
//! assert!(b.seq > a.seq);
//! assert_eq!(a.kind, EventKind::WorkSubmitted);
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of supervisor lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Work events ===
    /// A work unit was accepted; its slot is counted.
    ///
    /// Sets:
    /// - `outstanding`: count right after the increment
    WorkSubmitted,

    /// A work unit released its slot (normal return **or** panic).
    ///
    /// Sets:
    /// - `outstanding`: count right after the decrement
    WorkFinished,

    // === Drain events ===
    /// A drainer acquired the wake channel and began waiting.
    ///
    /// Sets:
    /// - `outstanding`: count observed when the drain began
    DrainStarted,

    /// A drain observed zero outstanding work and returned.
    ///
    /// Sets:
    /// - `outstanding`: always 0
    Drained,

    /// A grace-bounded drain gave up with work still outstanding.
    ///
    /// Sets:
    /// - `outstanding`: count observed when the window closed
    GraceExceeded,
}

/// Lifecycle event with a counter snapshot.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `outstanding`: outstanding count at the publishing site
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Outstanding work units observed by the publisher.
    pub outstanding: usize,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// next sequence number.
    pub fn new(kind: EventKind, outstanding: usize) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            outstanding,
        }
    }
}
