//! # Example: log_events
//!
//! Attaches the built-in [`LogWriter`] subscriber and walks through a small
//! submit/drain cycle so every lifecycle event is printed.
//!
//! ## Run
//! ```bash
//! cargo run --example log_events --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use taskdrain::{LogWriter, Supervisor};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let sup = Supervisor::default();
    sup.attach(Arc::new(LogWriter));

    for i in 0..3u64 {
        sup.submit(async move {
            tokio::time::sleep(Duration::from_millis(50 * (i + 1))).await;
        });
    }

    sup.drain().await;

    // Give the forwarding worker a beat to flush the tail of the stream.
    tokio::time::sleep(Duration::from_millis(50)).await;
}
