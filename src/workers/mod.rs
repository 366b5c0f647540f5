//! Refresh loop workers
//!
//! The scheduler owns the timer and the single-flight gate; each cycle runs
//! the fetcher and hands the outcome to the dashboard as an event.

pub mod core;
pub mod fetcher;
pub mod gate;
pub mod refresher;
