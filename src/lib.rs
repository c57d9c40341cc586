//! # FFI Playground
//!
//! A micro-benchmark harness that measures the cost of crossing the
//! Rust<->C foreign-function boundary. Equivalent array/string algorithms
//! (sum, sort, reverse, rotate, increment, string reversal) are run on
//! both sides of the boundary across a sweep of input sizes, and the
//! results are written out as a comparison report annotated with the
//! host's CPU topology.

pub mod affinity;
pub mod cpu;
pub mod error;
pub mod ffi;
pub mod registry;
pub mod report;
pub mod runner;
pub mod suite;
pub mod timing;
pub mod tui;

pub use error::BenchError;
pub use registry::WorkRegistry;
pub use runner::{run, RunConfig, RunOutcome};
pub use timing::convergence::{measure, TimedResult};

/// C compiler name detected at build time, if the C variants were compiled.
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");
