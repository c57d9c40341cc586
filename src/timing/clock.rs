//! Monotonic measurement source.
//!
//! With the default `cpu_cycles` feature, measurements are raw hardware
//! tick counts (RDTSC on x86, CNTVCT_EL0 on aarch64) and are normalized
//! to nanosecond durations through a calibration factor established once
//! at [`bootstrap`]. With `use_time`, measurements are plain
//! `std::time::Instant` durations and no calibration is needed.
//!
//! Either way the canonical unit handed to the rest of the harness is a
//! nanosecond-resolution [`Duration`].

use std::time::Duration;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
use std::sync::OnceLock;
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
use std::time::Instant;

// ============================================================================
// Tick-counter backend (default)
// ============================================================================

/// Raw measurement value: tick count or `Duration` depending on features.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
static NANOS_PER_TICK: OnceLock<f64> = OnceLock::new();

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    read_ticks()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    read_ticks().saturating_sub(start)
}

/// Establish the tick-to-nanosecond calibration factor.
///
/// Samples the tick counter against the OS monotonic clock over a short
/// window. Called once by the runner before the first measured call;
/// [`to_duration`] falls back to calibrating lazily if it was skipped.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn bootstrap() {
    let factor = *NANOS_PER_TICK.get_or_init(calibrate);
    log::debug!("tick calibration: {factor:.6} ns/tick");
}

/// Convert a raw measurement to the canonical nanosecond duration.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_duration(m: Measurement) -> Duration {
    let factor = *NANOS_PER_TICK.get_or_init(calibrate);
    Duration::from_nanos((m as f64 * factor).round() as u64)
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
fn calibrate() -> f64 {
    const CALIBRATION_WINDOW: Duration = Duration::from_millis(20);

    let wall_start = Instant::now();
    let tick_start = read_ticks();
    let mut wall;
    loop {
        wall = wall_start.elapsed();
        if wall >= CALIBRATION_WINDOW {
            break;
        }
        std::hint::spin_loop();
    }
    let ticks = read_ticks().saturating_sub(tick_start);
    if ticks == 0 {
        // Counter stuck or unreadable; treat ticks as nanoseconds.
        return 1.0;
    }
    wall.as_nanos() as f64 / ticks as f64
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
fn read_ticks() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        use core::arch::x86_64::{_mm_lfence, _rdtsc};
        // LFENCE keeps speculative execution from leaking into the reading.
        unsafe {
            _mm_lfence();
            let t = _rdtsc();
            _mm_lfence();
            t
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // CNTVCT_EL0: fixed-frequency virtual counter, readable from
        // userspace and consistent across cores.
        let val: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
        }
        val
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        compile_error!(
            "the cpu_cycles feature requires x86_64 or aarch64; build with --features use_time"
        );
    }
}

// ============================================================================
// Instant backend
// ============================================================================

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn bootstrap() {}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_duration(m: Measurement) -> Duration {
    m
}

/// Time a single expression, yielding `(Measurement, value)`.
///
/// Nothing but the expression itself sits between the two clock reads.
#[macro_export]
macro_rules! measure_span {
    ($e:expr) => {{
        let __start = $crate::timing::clock::now();
        let __value = $e;
        let __elapsed = $crate::timing::clock::elapsed(__start);
        (__elapsed, __value)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_roughly_monotonic() {
        let a = now();
        let b = now();
        let _ = (a, b);
        // elapsed() saturates, so a span is never negative.
        let span = elapsed(a);
        let _ = to_duration(span);
    }

    #[test]
    fn measured_span_converts_to_duration() {
        let (m, value) = crate::measure_span!({
            let mut sum = 0u64;
            for i in 0..10_000u64 {
                sum = std::hint::black_box(sum.wrapping_add(std::hint::black_box(i)));
            }
            sum
        });
        assert!(value > 0);
        // Conversion must not panic even before an explicit bootstrap.
        let _ = to_duration(m);
    }
}
