//! The benchmark suite: each benchmark pairs an idiomatic Rust
//! implementation with its C counterpart behind the FFI boundary.
//!
//! Variants time themselves inside their closure so that only the call
//! under test (including its slice handoff, for the C side) sits in the
//! timed span; the convergence loop never adds its own bookkeeping to it.

pub mod nop;
pub mod plus_one;
pub mod reverse;
pub mod rotate;
pub mod sort;
pub mod strings;
pub mod sum;

pub use nop::overhead_benches;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One measurable unit of work, self-timed.
pub struct Variant {
    /// Registry tag, e.g. `"C: Sum"`.
    pub tag: String,
    pub run: Box<dyn FnMut() -> Duration>,
}

impl Variant {
    pub fn new(tag: impl Into<String>, run: impl FnMut() -> Duration + 'static) -> Self {
        Self {
            tag: tag.into(),
            run: Box::new(run),
        }
    }
}

/// A benchmark that can produce its variants for a given input.
pub trait Benchmark {
    /// Short identifier, e.g. `"sum"`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Build the variants for one sweep input. Each variant owns whatever
    /// scratch state it needs; the shared input is never mutated.
    fn variants(&self, input: &SweepInput) -> Vec<Variant>;
}

/// Seeded per-size input data shared by every benchmark at that size.
pub struct SweepInput {
    pub size: usize,
    /// Full-range random i32s (sort, reverse, rotate, increment).
    pub numbers: Vec<i32>,
    /// Values in `-10..=10`, safe to sum without overflow at any size.
    pub small_numbers: Vec<i32>,
    /// Printable ASCII bytes (string reversal).
    pub ascii: Vec<u8>,
}

impl SweepInput {
    pub fn generate(size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed ^ size as u64);
        let numbers = (0..size).map(|_| rng.random()).collect();
        let small_numbers = (0..size).map(|_| rng.random_range(-10..=10)).collect();
        let ascii = (0..size).map(|_| rng.random_range(b' '..=b'~')).collect();
        Self {
            size,
            numbers,
            small_numbers,
            ascii,
        }
    }
}

/// Every sized benchmark, in sweep order.
pub fn build_suite() -> Vec<Box<dyn Benchmark>> {
    vec![
        Box::new(sum::Sum),
        Box::new(sort::Sort),
        Box::new(reverse::Reverse),
        Box::new(rotate::Rotate),
        Box::new(plus_one::PlusOne),
        Box::new(strings::ReverseString),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_are_reproducible_for_a_seed() {
        let a = SweepInput::generate(64, 123);
        let b = SweepInput::generate(64, 123);
        assert_eq!(a.numbers, b.numbers);
        assert_eq!(a.small_numbers, b.small_numbers);
        assert_eq!(a.ascii, b.ascii);
        assert!(a.small_numbers.iter().all(|&n| (-10..=10).contains(&n)));
        assert!(a.ascii.iter().all(|b| b.is_ascii_graphic() || *b == b' '));
    }

    #[test]
    fn every_benchmark_yields_a_rust_variant() {
        let input = SweepInput::generate(16, 7);
        for bench in build_suite() {
            let variants = bench.variants(&input);
            assert!(
                variants.iter().any(|v| v.tag.starts_with("Rust: ")),
                "{} has no Rust variant",
                bench.name()
            );
        }
    }

    #[test]
    fn variants_produce_a_duration() {
        let input = SweepInput::generate(32, 99);
        for bench in build_suite() {
            for mut variant in bench.variants(&input) {
                // Just exercise the closure once; any duration is valid.
                let _ = (variant.run)();
            }
        }
    }
}
