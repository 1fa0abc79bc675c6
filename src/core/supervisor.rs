//! # Supervisor: outstanding-work tracking and deterministic draining.
//!
//! The [`Supervisor`] pairs an atomic counter with a single-slot wake
//! channel. Every submission bumps the counter before the unit is spawned;
//! every completion decrements it and posts a payload-free token into the
//! wake channel, dropping the token when one is already parked. A drainer
//! loops "load counter, park on the wake channel" until it observes zero.
//!
//! ## Wiring
//! ```text
//! submit(work):
//!   outstanding.fetch_add(1)                 // before the spawn
//!   publish(WorkSubmitted)
//!   tokio::spawn(async { work.await })       // slot guard moved in
//!
//! slot guard drop (every exit path, panic included):
//!   outstanding.fetch_sub(1)
//!   wake.try_send(())                        // Full → token dropped
//!   publish(WorkFinished)
//!
//! drain():
//!   lock wake receiver                       // serializes drainers
//!   loop {
//!     outstanding.load() == 0 → return
//!     wake.recv().await
//!   }
//! ```
//!
//! ## Liveness
//! A completing unit does not need to know whether a drainer is parked. If
//! one is parked, it receives the token and re-checks. If none is parked,
//! the token stays buffered and satisfies the drainer's next wait; if a
//! token is already buffered, the new one is dropped and the buffered token
//! still unparks the drainer once, after which it re-checks the counter.
//! The decrement is ordered before the wake-up attempt, so the drainer
//! eventually observes zero after the final decrement.
//!
//! ## Phases
//! | Phase   | Meaning                               | Admits              |
//! |---------|---------------------------------------|---------------------|
//! | Running | counting, accepting submissions       | submit, drain       |
//! | Drained | a drain has returned                  | host teardown       |
//!
//! Submitting after a drain has returned is a host bug; debug builds assert,
//! release builds ignore it.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::{mpsc, Mutex};

use crate::config::Config;
use crate::error::DrainError;
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::Subscribe;

/// State shared between the supervisor handle, every slot guard, and any
/// parked drainer.
struct Shared {
    /// Submitted-but-not-finished work units.
    outstanding: AtomicUsize,
    /// Producer side of the single-slot wake channel.
    wake_tx: mpsc::Sender<()>,
    /// Set once a drain has observed zero and returned.
    drained: AtomicBool,
    /// Lifecycle event bus.
    bus: Bus,
}

/// One counted slot. Created before the work unit is spawned and moved into
/// it; `Drop` releases the slot on every exit path, unwinding included.
struct Slot {
    shared: Arc<Shared>,
}

impl Drop for Slot {
    fn drop(&mut self) {
        let left = self.shared.outstanding.fetch_sub(1, Ordering::AcqRel) - 1;
        // Full means a token is already parked; one pending wake-up is
        // enough to unpark the drainer, which re-checks the counter.
        let _ = self.shared.wake_tx.try_send(());
        self.shared.bus.publish(Event::new(EventKind::WorkFinished, left));
    }
}

/// Tracks background work so a host can shut down deterministically.
///
/// Cheap to clone; all clones share one counter, one wake channel, and one
/// event bus. Independent supervisors never interfere with each other.
///
/// ## Example
/// ```rust
/// use taskdrain::Supervisor;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let sup = Supervisor::default();
///     sup.submit(async {
///         // background work
///     });
///     sup.drain().await;
///     assert_eq!(sup.outstanding(), 0);
/// }
/// ```
#[derive(Clone)]
pub struct Supervisor {
    /// Runtime configuration.
    pub cfg: Config,
    shared: Arc<Shared>,
    /// Consumer side of the wake channel. The mutex serializes drainers:
    /// each acquires the receiver, re-checks the counter, and returns once
    /// it observes zero.
    wake_rx: Arc<Mutex<mpsc::Receiver<()>>>,
}

impl Supervisor {
    /// Creates a supervisor with no outstanding work and an empty wake
    /// channel.
    pub fn new(cfg: Config) -> Self {
        let (wake_tx, wake_rx) = mpsc::channel(1);
        let bus = Bus::new(cfg.bus_capacity_clamped());
        Self {
            cfg,
            shared: Arc::new(Shared {
                outstanding: AtomicUsize::new(0),
                wake_tx,
                drained: AtomicBool::new(false),
                bus,
            }),
            wake_rx: Arc::new(Mutex::new(wake_rx)),
        }
    }

    /// Submits an async work unit for concurrent execution.
    ///
    /// The outstanding count is incremented before the unit is scheduled;
    /// the matching decrement and wake-up run when the unit exits, whether
    /// it returns normally, panics, or is dropped by a shutting-down
    /// runtime. `submit` itself never blocks and never surfaces a failure.
    ///
    /// The work unit owns its own error handling: the supervisor does not
    /// log, capture, or rethrow anything that happens inside it.
    pub fn submit<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let slot = self.acquire_slot();
        tokio::spawn(async move {
            let _slot = slot;
            work.await;
        });
    }

    /// Submits a synchronous work unit, run on the blocking thread pool.
    ///
    /// Same slot accounting and panic safety as [`Supervisor::submit`];
    /// intended for units that do blocking I/O or CPU-bound work.
    pub fn submit_blocking<F>(&self, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let slot = self.acquire_slot();
        tokio::task::spawn_blocking(move || {
            let _slot = slot;
            work();
        });
    }

    /// Blocks until the outstanding count is observed at zero.
    ///
    /// Loop: load the counter; if zero, return; otherwise park on the wake
    /// channel and re-check. When `drain` returns, every unit submitted
    /// before the final observation has fully finished and its side effects
    /// are visible to the caller.
    ///
    /// Concurrent drainers serialize on the wake receiver; each returns
    /// once it observes zero. Submitting after a drain has returned is not
    /// supported.
    pub async fn drain(&self) {
        let mut wake = self.wake_rx.lock().await;
        let snapshot = self.outstanding();
        self.shared
            .bus
            .publish(Event::new(EventKind::DrainStarted, snapshot));

        while self.shared.outstanding.load(Ordering::Acquire) != 0 {
            // None is unreachable while `shared` holds a sender; bail out
            // rather than spin if it ever happens.
            if wake.recv().await.is_none() {
                break;
            }
        }

        self.shared.drained.store(true, Ordering::Release);
        self.shared.bus.publish(Event::new(EventKind::Drained, 0));
    }

    /// Drains with a deadline.
    ///
    /// Returns [`DrainError::GraceExceeded`] if work is still outstanding
    /// when `grace` elapses. The supervisor stays intact on timeout: the
    /// remaining units keep running and the drain may be retried.
    ///
    /// ```no_run
    /// # use std::time::Duration;
    /// # use taskdrain::Supervisor;
    /// # async fn shutdown(sup: &Supervisor) {
    /// if let Err(err) = sup.drain_within(Duration::from_secs(10)).await {
    ///     eprintln!("forcing exit: {err}");
    /// }
    /// # }
    /// ```
    pub async fn drain_within(&self, grace: Duration) -> Result<(), DrainError> {
        match tokio::time::timeout(grace, self.drain()).await {
            Ok(()) => Ok(()),
            Err(_) => {
                let outstanding = self.outstanding();
                self.shared
                    .bus
                    .publish(Event::new(EventKind::GraceExceeded, outstanding));
                Err(DrainError::GraceExceeded { grace, outstanding })
            }
        }
    }

    /// Drains within the configured [`Config::grace`] window.
    pub async fn drain_graceful(&self) -> Result<(), DrainError> {
        self.drain_within(self.cfg.grace).await
    }

    /// Returns the current outstanding count.
    pub fn outstanding(&self) -> usize {
        self.shared.outstanding.load(Ordering::Acquire)
    }

    /// Creates a raw receiver for lifecycle events.
    ///
    /// Only events published after the call are observed; slow receivers
    /// skip the oldest events once they lag past the bus capacity.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.shared.bus.subscribe()
    }

    /// Attaches a subscriber, driven by a dedicated forwarding worker.
    ///
    /// The worker exits when every supervisor clone has been dropped. A
    /// slow subscriber lags and skips events; it never stalls submission or
    /// draining.
    pub fn attach(&self, sub: Arc<dyn Subscribe>) {
        let mut rx = self.shared.bus.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => sub.on_event(&ev).await,
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }

    /// Increments the counter and builds the guard that will release it.
    ///
    /// Runs on the submitting side so the increment is ordered before the
    /// task body and before the matching decrement.
    fn acquire_slot(&self) -> Slot {
        debug_assert!(
            !self.shared.drained.load(Ordering::Acquire),
            "submit after drain returned"
        );
        let shared = Arc::clone(&self.shared);
        let now = shared.outstanding.fetch_add(1, Ordering::AcqRel) + 1;
        shared.bus.publish(Event::new(EventKind::WorkSubmitted, now));
        Slot { shared }
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
