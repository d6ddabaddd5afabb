//! Shared counters for instantiation closures

use std::sync::atomic::{AtomicUsize, Ordering};

/// Sequence generator for unique values
///
/// Instantiation closures can capture a `&Sequence` and stay `Fn`, which is
/// what the parallel batch path requires.
#[derive(Debug)]
pub struct Sequence {
    current: AtomicUsize,
}

impl Sequence {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(start: usize) -> Self {
        Self {
            current: AtomicUsize::new(start),
        }
    }

    /// Return the current value and advance
    pub fn next(&self) -> usize {
        self.current.fetch_add(1, Ordering::SeqCst)
    }

    pub fn next_string(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.next())
    }

    /// Value the next call to [`Sequence::next`] will return
    pub fn current(&self) -> usize {
        self.current.load(Ordering::SeqCst)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}
