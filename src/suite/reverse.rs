//! In-place array reversal. Each variant owns its scratch array and
//! reverses it repeatedly; reversing a reversed array is the same work,
//! so no per-iteration reset is needed.

use super::{Benchmark, SweepInput, Variant};
use crate::ffi;
use crate::measure_span;
use crate::timing::clock::to_duration;

pub struct Reverse;

impl Benchmark for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn description(&self) -> &'static str {
        "In-place reversal of an i32 array"
    }

    fn variants(&self, input: &SweepInput) -> Vec<Variant> {
        let mut nums = input.numbers.clone();
        let mut variants = vec![Variant::new("Rust: Reverse", move || {
            let (m, _) = measure_span!(nums.reverse());
            to_duration(m)
        })];

        if ffi::C_AVAILABLE {
            let mut nums = input.numbers.clone();
            variants.push(Variant::new("C: Reverse", move || {
                let (m, _) = measure_span!(ffi::reverse(&mut nums));
                to_duration(m)
            }));
        }

        variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(c_implementation_active)]
    #[test]
    fn c_reverse_matches_rust_reverse() {
        let input = SweepInput::generate(100, 5);
        let mut rust_side = input.numbers.clone();
        let mut c_side = input.numbers.clone();
        rust_side.reverse();
        ffi::reverse(&mut c_side);
        assert_eq!(rust_side, c_side);
    }
}
