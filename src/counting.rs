//! Comparison counting
//!
//! [`ComparisonCounter`] wraps any comparator so that benchmarks and
//! differential harnesses can measure how many comparisons a strategy makes.
//!
//! # Example
//!
//! ```rust
//! use soft_heap_select::counting::ComparisonCounter;
//! use soft_heap_select::select::greatest_k_heap;
//!
//! let counter = ComparisonCounter::new();
//! let top = greatest_k_heap(counter.wrap(i32::cmp), vec![4, 1, 7, 3], 1);
//! assert_eq!(top, vec![7]);
//! assert_eq!(counter.comparisons(), 3);
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// Shared comparison tally
///
/// Every comparator produced by [`wrap`](Self::wrap) increments the same
/// count, including comparators wrapped before a [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct ComparisonCounter {
    count: Rc<Cell<u64>>,
}

impl ComparisonCounter {
    /// Creates a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `cmp` so that each call is counted
    pub fn wrap<E: ?Sized, F>(&self, cmp: F) -> impl Fn(&E, &E) -> Ordering
    where
        F: Fn(&E, &E) -> Ordering,
    {
        let count = Rc::clone(&self.count);
        move |a: &E, b: &E| {
            count.set(count.get() + 1);
            cmp(a, b)
        }
    }

    /// Number of comparisons made so far
    pub fn comparisons(&self) -> u64 {
        self.count.get()
    }

    /// Resets the tally to zero
    pub fn reset(&self) {
        self.count.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_resets() {
        let counter = ComparisonCounter::new();
        let cmp = counter.wrap(|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(cmp(&1, &2), Ordering::Less);
        assert_eq!(cmp(&2, &2), Ordering::Equal);
        assert_eq!(counter.comparisons(), 2);

        counter.reset();
        assert_eq!(counter.comparisons(), 0);
        cmp(&3, &1);
        assert_eq!(counter.comparisons(), 1);
    }

    #[test]
    fn test_clones_share_tally() {
        let counter = ComparisonCounter::new();
        let handle = counter.clone();
        let cmp = counter.wrap(str::cmp);
        cmp("a", "b");
        assert_eq!(handle.comparisons(), 1);
    }
}
