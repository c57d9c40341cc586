//! In-place sort. The per-iteration scratch copy happens before the timed
//! span starts, so only the sort itself is measured.

use super::{Benchmark, SweepInput, Variant};
use crate::ffi;
use crate::measure_span;
use crate::timing::clock::to_duration;

pub struct Sort;

impl Benchmark for Sort {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn description(&self) -> &'static str {
        "Ascending in-place sort of random i32s"
    }

    fn variants(&self, input: &SweepInput) -> Vec<Variant> {
        let nums = input.numbers.clone();
        let mut variants = vec![Variant::new("Rust: Sort", move || {
            let mut scratch = nums.clone();
            let (m, _) = measure_span!(scratch.sort_unstable());
            to_duration(m)
        })];

        if ffi::C_AVAILABLE {
            let nums = input.numbers.clone();
            variants.push(Variant::new("C: Sort", move || {
                let mut scratch = nums.clone();
                let (m, _) = measure_span!(ffi::sort(&mut scratch));
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
    fn c_sort_matches_rust_sort() {
        let input = SweepInput::generate(513, 42);
        let mut rust_side = input.numbers.clone();
        let mut c_side = input.numbers.clone();
        rust_side.sort_unstable();
        ffi::sort(&mut c_side);
        assert_eq!(rust_side, c_side);
    }

    #[test]
    fn variants_leave_the_input_untouched() {
        let input = SweepInput::generate(64, 7);
        let before = input.numbers.clone();
        for mut v in Sort.variants(&input) {
            let _ = (v.run)();
        }
        assert_eq!(input.numbers, before);
    }
}
