//! Runtime core: work tracking and draining.
//!
//! The only public API from this module is [`Supervisor`], which counts
//! outstanding background work, spawns submitted units, and blocks drainers
//! until everything in flight has finished.

mod supervisor;

pub use supervisor::Supervisor;
