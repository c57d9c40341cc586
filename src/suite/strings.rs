//! ASCII string reversal, allocating the reversed copy. The allocation is
//! part of the operation on both sides; that is the comparison the
//! original playground makes.

use std::hint::black_box;

use super::{Benchmark, SweepInput, Variant};
use crate::ffi;
use crate::measure_span;
use crate::timing::clock::to_duration;

pub fn reverse_string_rust(src: &[u8]) -> Vec<u8> {
    src.iter().rev().copied().collect()
}

pub struct ReverseString;

impl Benchmark for ReverseString {
    fn name(&self) -> &'static str {
        "reverse_string"
    }

    fn description(&self) -> &'static str {
        "Reverse an ASCII string into a new allocation"
    }

    fn variants(&self, input: &SweepInput) -> Vec<Variant> {
        let ascii = input.ascii.clone();
        let mut variants = vec![Variant::new("Rust: Reverse String", move || {
            let (m, out) = measure_span!(reverse_string_rust(&ascii));
            black_box(out);
            to_duration(m)
        })];

        if ffi::C_AVAILABLE {
            let ascii = input.ascii.clone();
            variants.push(Variant::new("C: Reverse String", move || {
                let (m, out) = measure_span!(ffi::reverse_string(&ascii));
                black_box(out);
                to_duration(m)
            }));
        }

        variants
    }
}
