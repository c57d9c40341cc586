//! Adaptive convergence loop.
//!
//! Instead of a fixed iteration count, a unit of work is re-measured until
//! neither the running minimum nor the running maximum has improved for
//! `stability_window` consecutive samples. Stable operations converge
//! quickly; noisy ones automatically run longer.

use std::time::Duration;

/// The immutable record of one converged measurement.
///
/// Constructed only by [`measure`]; `min() <= max()` always holds, and
/// `iterations() >= stability_window + 1` since the first sample improves
/// both bounds from their sentinel values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedResult {
    min: Duration,
    max: Duration,
    iterations: u32,
}

impl TimedResult {
    /// Fastest observed sample.
    pub fn min(&self) -> Duration {
        self.min
    }

    /// Slowest observed sample.
    pub fn max(&self) -> Duration {
        self.max
    }

    /// Total number of samples taken before convergence.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// Repeatedly invoke `work` until the observed extremes stabilize.
///
/// `work` returns the duration of the unit it performed; only that unit is
/// timed, none of the loop bookkeeping. A sample that strictly improves
/// either extreme resets the non-improvement counter; the loop terminates
/// once `stability_window` consecutive samples improved neither.
///
/// A constant-duration work unit therefore takes exactly
/// `stability_window + 1` samples.
///
/// # Panics
///
/// Panics if `stability_window` is zero. A panic inside `work` propagates
/// immediately; a failing measured operation is a defect in the thing
/// being benchmarked, not a condition to mask.
pub fn measure<F>(stability_window: u32, mut work: F) -> TimedResult
where
    F: FnMut() -> Duration,
{
    assert!(stability_window >= 1, "stability window must be at least 1");

    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    let mut since_improvement = 0u32;
    let mut total = 0u32;

    loop {
        let d = work();
        total += 1;

        let mut improved = false;
        if d < min {
            min = d;
            improved = true;
        }
        if d > max {
            max = d;
            improved = true;
        }

        if improved {
            since_improvement = 0;
        } else {
            since_improvement += 1;
            if since_improvement == stability_window {
                break;
            }
        }
    }

    TimedResult {
        min,
        max,
        iterations: total,
    }
}
