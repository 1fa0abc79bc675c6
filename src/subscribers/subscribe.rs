//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event handlers
//! into the supervisor. Each attached subscriber is driven by a dedicated
//! worker loop fed from the event bus (see
//! [`Supervisor::attach`](crate::Supervisor::attach)).
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching) — they never block the
//!   publisher or the drain path.
//! - A subscriber that falls behind the bus capacity skips the oldest
//!   events; the supervisor's semantics are unaffected.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
///
/// Called from a subscriber-dedicated worker task. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative
/// waits).
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single event for this subscriber.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
