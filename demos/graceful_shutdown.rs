//! # Example: graceful_shutdown
//!
//! The host pattern the supervisor was built for: spawn background work over
//! the process lifetime, block on an OS signal, then drain with a grace
//! window before exiting.
//!
//! ## Flow
//! ```text
//! Supervisor::new()
//!     ├─► submit(periodic background unit) × N
//!     ├─► tokio::signal::ctrl_c().await
//!     └─► drain_graceful()
//!          ├─ Ok        → clean exit
//!          └─ Err(err)  → log and force exit
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example graceful_shutdown
//! ```

use std::time::Duration;

use taskdrain::{Config, Supervisor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sup = Supervisor::new(Config {
        grace: Duration::from_secs(5),
        ..Config::default()
    });

    // A few short-lived background units, staggered like cache warmups or
    // notification sends in a real server.
    for i in 0..4u64 {
        sup.submit(async move {
            tokio::time::sleep(Duration::from_millis(300 * (i + 1))).await;
            println!("[unit {i}] done");
        });
    }

    // And one blocking unit on the blocking pool.
    sup.submit_blocking(|| {
        std::thread::sleep(Duration::from_millis(500));
        println!("[blocking unit] done");
    });

    println!("running; press Ctrl-C to shut down ({} outstanding)", sup.outstanding());
    tokio::signal::ctrl_c().await?;

    println!("signal received; draining...");
    match sup.drain_graceful().await {
        Ok(()) => println!("all background work finished"),
        Err(err) => eprintln!("forcing exit: {}", err.as_message()),
    }
    Ok(())
}
