//! Timing infrastructure: the raw measurement source and the adaptive
//! convergence loop built on top of it.

pub mod clock;
pub mod convergence;

pub use clock::{bootstrap, elapsed, now, to_duration, Measurement};
pub use convergence::{measure, TimedResult};
