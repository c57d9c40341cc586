//! Boundary-overhead baselines, measured once per run rather than per
//! input size: the cost of an empty timed span, of an empty C call, and
//! of materializing a C string on the Rust side.

use std::hint::black_box;

use super::Variant;
use crate::ffi;
use crate::measure_span;
use crate::timing::clock::to_duration;

pub fn overhead_benches() -> Vec<Variant> {
    let mut benches = vec![Variant::new("Timer Overhead", || {
        let (m, _) = measure_span!(());
        to_duration(m)
    })];

    if ffi::C_AVAILABLE {
        benches.push(Variant::new("C: Nop", || {
            let (m, _) = measure_span!(ffi::nop());
            to_duration(m)
        }));
        benches.push(Variant::new("C: Hello String", || {
            let (m, s) = measure_span!(ffi::hello());
            black_box(s);
            to_duration(m)
        }));
    }

    benches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_overhead_is_always_present() {
        let benches = overhead_benches();
        assert_eq!(benches[0].tag, "Timer Overhead");
        if ffi::C_AVAILABLE {
            assert_eq!(benches.len(), 3);
        } else {
            assert_eq!(benches.len(), 1);
        }
    }

    #[test]
    fn overhead_closures_run() {
        for mut bench in overhead_benches() {
            let _ = (bench.run)();
        }
    }
}
