//! Rotate right by `len / 3`, the sweep's representative rotation. The C
//! side uses the triple-reversal trick; the Rust side uses
//! `slice::rotate_right`.

use super::{Benchmark, SweepInput, Variant};
use crate::ffi;
use crate::measure_span;
use crate::timing::clock::to_duration;

/// Rotate right by `count`, any `count` (reduced modulo the length).
pub fn rotate_right_rust(nums: &mut [i32], count: usize) {
    if nums.is_empty() {
        return;
    }
    nums.rotate_right(count % nums.len());
}

pub struct Rotate;

impl Benchmark for Rotate {
    fn name(&self) -> &'static str {
        "rotate"
    }

    fn description(&self) -> &'static str {
        "Rotate an i32 array right by a third of its length"
    }

    fn variants(&self, input: &SweepInput) -> Vec<Variant> {
        let count = input.size / 3;

        let mut nums = input.numbers.clone();
        let mut variants = vec![Variant::new("Rust: Rotate Right", move || {
            let (m, _) = measure_span!(rotate_right_rust(&mut nums, count));
            to_duration(m)
        })];

        if ffi::C_AVAILABLE {
            let mut nums = input.numbers.clone();
            variants.push(Variant::new("C: Rotate Right", move || {
                let (m, _) = measure_span!(ffi::rotate_right(&mut nums, count));
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
    fn rotate_matches_the_documented_example() {
        let mut nums = [1, 2, 3, 4, 5];
        rotate_right_rust(&mut nums, 3);
        assert_eq!(nums, [3, 4, 5, 1, 2]);
    }

    #[test]
    fn rotate_round_trip_restores_the_input() {
        // Rotating right by k then by n - k is the identity, 0 <= k < n.
        for n in [1usize, 2, 3, 5, 8, 16, 33] {
            let original: Vec<i32> = (0..n as i32).collect();
            for k in 0..n {
                let mut nums = original.clone();
                rotate_right_rust(&mut nums, k);
                rotate_right_rust(&mut nums, n - k);
                assert_eq!(nums, original, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn rotate_handles_empty_and_oversized_counts() {
        rotate_right_rust(&mut [], 4);
        let mut nums = [1, 2, 3];
        rotate_right_rust(&mut nums, 7);
        assert_eq!(nums, [3, 1, 2]);
    }

    #[cfg(c_implementation_active)]
    #[test]
    fn c_rotate_matches_rust_rotate() {
        let input = SweepInput::generate(101, 13);
        for count in [0usize, 1, 33, 100, 101, 250] {
            let mut rust_side = input.numbers.clone();
            let mut c_side = input.numbers.clone();
            rotate_right_rust(&mut rust_side, count);
            ffi::rotate_right(&mut c_side, count);
            assert_eq!(rust_side, c_side, "count={count}");
        }
    }

    #[cfg(c_implementation_active)]
    #[test]
    fn c_rotate_round_trip_restores_the_input() {
        let original: Vec<i32> = (0..16).collect();
        for k in 0..16usize {
            let mut nums = original.clone();
            ffi::rotate_right(&mut nums, k);
            ffi::rotate_right(&mut nums, 16 - k);
            assert_eq!(nums, original, "k={k}");
        }
    }
}
