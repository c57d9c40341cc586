//! Array sum: idiomatic Rust fold vs the C loop across the boundary.

use std::hint::black_box;

use super::{Benchmark, SweepInput, Variant};
use crate::ffi;
use crate::measure_span;
use crate::timing::clock::to_duration;

pub fn sum_rust(nums: &[i32]) -> i32 {
    nums.iter().copied().fold(0, i32::wrapping_add)
}

pub struct Sum;

impl Benchmark for Sum {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn description(&self) -> &'static str {
        "Wrapping i32 sum of an array"
    }

    fn variants(&self, input: &SweepInput) -> Vec<Variant> {
        let nums = input.small_numbers.clone();
        let mut variants = vec![Variant::new("Rust: Sum", move || {
            let (m, _) = measure_span!(black_box(sum_rust(&nums)));
            to_duration(m)
        })];

        if ffi::C_AVAILABLE {
            let nums = input.small_numbers.clone();
            variants.push(Variant::new("C: Sum", move || {
                let (m, _) = measure_span!(black_box(ffi::sum(&nums)));
                to_duration(m)
            }));
        }

        variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_handles_negatives_and_empty() {
        assert_eq!(sum_rust(&[1, -2, 3, -4]), -2);
        assert_eq!(sum_rust(&[]), 0);
    }

    #[test]
    fn sum_wraps_instead_of_panicking() {
        assert_eq!(sum_rust(&[i32::MAX, 1]), i32::MIN);
    }

    #[cfg(c_implementation_active)]
    #[test]
    fn c_side_agrees_with_rust() {
        let input = SweepInput::generate(1023, 42);
        assert_eq!(ffi::sum(&input.small_numbers), sum_rust(&input.small_numbers));
    }
}
