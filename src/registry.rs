//! Append-only store for converged measurements, grouped by benchmark tag.
//!
//! Built fresh for every run by the measurement worker and handed by value
//! to the report task; nothing else ever touches it, so no locking is
//! involved. There is deliberately no mutation or removal API.

use std::collections::HashMap;

use crate::timing::TimedResult;

/// Results keyed by tag, preserving both tag-insertion order and the
/// per-tag recording order of `(input size, result)` pairs.
#[derive(Debug, Default)]
pub struct WorkRegistry {
    order: Vec<String>,
    entries: HashMap<String, Vec<(usize, TimedResult)>>,
}

impl WorkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `(size, result)` to the sequence keyed by `tag`, creating the
    /// sequence on first use.
    pub fn record(&mut self, tag: &str, size: usize, result: TimedResult) {
        match self.entries.get_mut(tag) {
            Some(seq) => seq.push((size, result)),
            None => {
                self.order.push(tag.to_owned());
                self.entries.insert(tag.to_owned(), vec![(size, result)]);
            }
        }
    }

    /// Tags in first-insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Recorded `(size, result)` pairs for `tag`, in recording order.
    pub fn entries(&self, tag: &str) -> &[(usize, TimedResult)] {
        self.entries.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
