//! In-place increment of every element. The C side additionally ships a
//! SIMD variant (SSE2 or NEON, per target).

use super::{Benchmark, SweepInput, Variant};
use crate::ffi;
use crate::measure_span;
use crate::timing::clock::to_duration;

pub fn plus_one_rust(nums: &mut [i32]) {
    for n in nums.iter_mut() {
        *n = n.wrapping_add(1);
    }
}

pub struct PlusOne;

impl Benchmark for PlusOne {
    fn name(&self) -> &'static str {
        "plus_one"
    }

    fn description(&self) -> &'static str {
        "Increment every element of an i32 array in place"
    }

    fn variants(&self, input: &SweepInput) -> Vec<Variant> {
        let mut nums = input.numbers.clone();
        let mut variants = vec![Variant::new("Rust: +1 In-Place", move || {
            let (m, _) = measure_span!(plus_one_rust(&mut nums));
            to_duration(m)
        })];

        if ffi::C_AVAILABLE {
            let mut nums = input.numbers.clone();
            variants.push(Variant::new("C: +1", move || {
                let (m, _) = measure_span!(ffi::plus_one(&mut nums));
                to_duration(m)
            }));

            let mut nums = input.numbers.clone();
            variants.push(Variant::new("C: +1 SIMD", move || {
                let (m, _) = measure_span!(ffi::plus_one_simd(&mut nums));
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
    fn increments_every_element() {
        let mut nums = [0, -1, 41, i32::MAX];
        plus_one_rust(&mut nums);
        assert_eq!(nums, [1, 0, 42, i32::MIN]);
    }

    #[cfg(c_implementation_active)]
    #[test]
    fn c_variants_match_rust() {
        let input = SweepInput::generate(130, 3);
        let mut rust_side = input.numbers.clone();
        let mut c_scalar = input.numbers.clone();
        let mut c_simd = input.numbers.clone();
        plus_one_rust(&mut rust_side);
        ffi::plus_one(&mut c_scalar);
        ffi::plus_one_simd(&mut c_simd);
        assert_eq!(rust_side, c_scalar);
        assert_eq!(rust_side, c_simd);
    }
}
