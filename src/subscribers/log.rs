//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [submitted] outstanding=3
//! [finished] outstanding=2
//! [drain-started] outstanding=2
//! [drained]
//! [grace-exceeded] outstanding=1
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable event
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::WorkSubmitted => {
                println!("[submitted] outstanding={}", e.outstanding);
            }
            EventKind::WorkFinished => {
                println!("[finished] outstanding={}", e.outstanding);
            }
            EventKind::DrainStarted => {
                println!("[drain-started] outstanding={}", e.outstanding);
            }
            EventKind::Drained => {
                println!("[drained]");
            }
            EventKind::GraceExceeded => {
                println!("[grace-exceeded] outstanding={}", e.outstanding);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
