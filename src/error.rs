//! Error taxonomy for the benchmark run.
//!
//! Both variants are recoverable: a missing topology source degrades to an
//! empty [`CpuInfo`](crate::cpu::CpuInfo), and a failed report write still
//! leaves the measured data in memory. A panic inside measured work is the
//! only fatal condition and is re-raised by the runner, never wrapped here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// The topology pseudo-file is absent or unreadable.
    #[error("could not read topology source {path}: {source}")]
    Topology {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination for the rendered report cannot be written.
    #[error("could not write report to {path}: {source}")]
    ReportSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
