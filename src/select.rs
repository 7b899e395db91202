//! Top-k selection strategies
//!
//! Each function returns the `k` greatest elements of `input` under `cmp`,
//! greatest first. The result has length `min(k, input size)`, and all
//! strategies agree on it for any total order.
//!
//! | Strategy              | Comparisons          | Memory |
//! |-----------------------|----------------------|--------|
//! | [`greatest_k_heap`]   | O(n log k) worst     | O(k)   |
//! | [`greatest_k_quick`]  | O(n) expected        | O(n)   |
//! | [`greatest_k_soft`]   | O(n log 1/ε) amortized, mostly one per element | O(k) |
//!
//! # Soft selection
//!
//! The soft strategy keeps 2k candidates in a [`SoftHeap`]. Every further
//! element is compared once against the heap's minimum key and admitted only
//! if strictly greater, displacing the minimum. Rebuilding the heap every
//! `floor(k / ε)` insertions caps corruption at k elements, so at least k
//! candidates always rank at or above everything discarded. An exact resolver
//! then picks the top k of the survivors.
//!
//! The rebuild interval is at least the build size 2k. With ε close to one half
//! and a small k it equals 2k, and every admission pays for a rebuild; a
//! smaller ε keeps the filter cheap.
//!
//! # Example
//!
//! ```rust
//! use soft_heap_select::select::{greatest_k_heap, greatest_k_quick, greatest_k_soft};
//!
//! let input = vec![5, 3, 8, 1, 9, 2];
//! assert_eq!(greatest_k_heap(i32::cmp, input.clone(), 3), vec![9, 8, 5]);
//! assert_eq!(greatest_k_quick(i32::cmp, input.clone(), 3), vec![9, 8, 5]);
//! assert_eq!(greatest_k_soft(i32::cmp, input, 3), vec![9, 8, 5]);
//! ```

use crate::bounded::BoundedHeap;
use crate::config::{Resolver, SelectConfig};
use crate::quickselect;
use crate::soft_heap::SoftHeap;
use std::cmp::Ordering;

/// Exact top-k through a bounded binary heap
pub fn greatest_k_heap<E, C, I>(cmp: C, input: I, k: usize) -> Vec<E>
where
    C: Fn(&E, &E) -> Ordering,
    I: IntoIterator<Item = E>,
{
    if k == 0 {
        return Vec::new();
    }
    let mut heap = BoundedHeap::new(k, cmp);
    let mut skipped = 0usize;
    for elem in input {
        if !heap.offer(elem) {
            skipped += 1;
        }
    }
    tracing::debug!(k, kept = heap.len(), skipped, "bounded-heap selection done");
    heap.into_sorted_desc()
}

/// Exact top-k by quickselect over the materialized input
pub fn greatest_k_quick<E, C, I>(cmp: C, input: I, k: usize) -> Vec<E>
where
    C: Fn(&E, &E) -> Ordering,
    I: IntoIterator<Item = E>,
{
    if k == 0 {
        return Vec::new();
    }
    let items: Vec<E> = input.into_iter().collect();
    let n = items.len();
    let top = quickselect::greatest_k(items, k, &cmp);
    tracing::debug!(k, n, "quickselect selection done");
    top
}

/// Exact top-k through a soft-heap filter with the default configuration
pub fn greatest_k_soft<E, C, I>(cmp: C, input: I, k: usize) -> Vec<E>
where
    E: Clone,
    C: Fn(&E, &E) -> Ordering,
    I: IntoIterator<Item = E>,
{
    greatest_k_soft_with(&SelectConfig::default(), cmp, input, k)
}

/// Exact top-k through a soft-heap filter
///
/// `config` sets the heap's error bound and the resolver applied to the
/// surviving candidates.
///
/// **Time Complexity**: one comparison per element that fails the filter,
/// plus O(log 1/ε) amortized per admitted element and the cost of resolving
/// 2k survivors.
pub fn greatest_k_soft_with<E, C, I>(config: &SelectConfig, cmp: C, input: I, k: usize) -> Vec<E>
where
    E: Clone,
    C: Fn(&E, &E) -> Ordering,
    I: IntoIterator<Item = E>,
{
    match k {
        0 => return Vec::new(),
        1 => return max_scan(&cmp, input).into_iter().collect(),
        _ => {}
    }

    let mut input = input.into_iter();
    let mut heap = SoftHeap::with_config(&cmp, config.heap());
    heap.extend(input.by_ref().take(k.saturating_mul(2)));

    let threshold = config.rebuild_threshold(k);
    let (mut admitted, mut rejected, mut rebuilds) = (0usize, 0usize, 0usize);
    for elem in input {
        let greater = heap
            .peek_key()
            .map_or(true, |key| cmp(&elem, key) == Ordering::Greater);
        if !greater {
            rejected += 1;
            continue;
        }
        heap.extract_min().expect("filter heap holds 2k elements");
        heap.insert(elem);
        admitted += 1;
        if heap.insertions() >= threshold {
            heap.rebuild();
            rebuilds += 1;
        }
    }

    let survivors = heap.into_vec();
    tracing::debug!(
        k,
        admitted,
        discarded = rejected + admitted,
        rebuilds,
        survivors = survivors.len(),
        "soft-heap selection done"
    );
    match config.resolver() {
        Resolver::Quickselect => quickselect::greatest_k(survivors, k, &cmp),
        Resolver::BoundedHeap => greatest_k_heap(&cmp, survivors, k),
    }
}

/// Greatest element in n - 1 comparisons; the earliest wins ties
fn max_scan<E, C, I>(cmp: &C, input: I) -> Option<E>
where
    C: Fn(&E, &E) -> Ordering,
    I: IntoIterator<Item = E>,
{
    input.into_iter().reduce(|best, elem| {
        if cmp(&elem, &best) == Ordering::Greater {
            elem
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting::ComparisonCounter;

    fn sorted_top(mut items: Vec<i64>, k: usize) -> Vec<i64> {
        items.sort_unstable_by(|a, b| b.cmp(a));
        items.truncate(k);
        items
    }

    #[test]
    fn test_strategies_agree() {
        let input: Vec<i64> = (0..500).map(|i| (i * 7919) % 1009).collect();
        for k in [0, 1, 2, 5, 17, 100, 499, 500, 800] {
            let expected = sorted_top(input.clone(), k);
            assert_eq!(greatest_k_heap(i64::cmp, input.clone(), k), expected);
            assert_eq!(greatest_k_quick(i64::cmp, input.clone(), k), expected);
            assert_eq!(greatest_k_soft(i64::cmp, input.clone(), k), expected);
        }
    }

    #[test]
    fn test_soft_rebuilds_on_ascending_input() {
        // Every element passes the filter, forcing periodic rebuilds
        let config = SelectConfig::new(0.25).unwrap();
        let top = greatest_k_soft_with(&config, i64::cmp, 0..2000, 4);
        assert_eq!(top, vec![1999, 1998, 1997, 1996]);
    }

    #[test]
    fn test_threshold_equal_to_build_size() {
        // floor(2 / 0.49) == 4 == 2k: every admission rebuilds
        let config = SelectConfig::new(0.49).unwrap();
        assert_eq!(config.rebuild_threshold(2), 4);
        let top = greatest_k_soft_with(&config, i64::cmp, 0..500, 2);
        assert_eq!(top, vec![499, 498]);
        let input: Vec<i64> = (0..2000).map(|i| (i * 7919) % 2003).collect();
        let top = greatest_k_soft_with(&config, i64::cmp, input.clone(), 24);
        assert_eq!(top, sorted_top(input, 24));
    }

    #[test]
    fn test_bounded_resolver() {
        let config = SelectConfig::default().with_resolver(Resolver::BoundedHeap);
        let input: Vec<i64> = (0..300).rev().collect();
        assert_eq!(
            greatest_k_soft_with(&config, i64::cmp, input, 3),
            vec![299, 298, 297]
        );
    }

    #[test]
    fn test_max_scan_comparisons() {
        let counter = ComparisonCounter::new();
        let cmp = counter.wrap(i64::cmp);
        assert_eq!(max_scan(&cmp, vec![3, 9, 2, 9, 4]), Some(9));
        assert_eq!(counter.comparisons(), 4);
        assert_eq!(max_scan(&cmp, Vec::new()), None);
    }

    #[test]
    fn test_soft_max_prefers_earliest() {
        let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
        let top = greatest_k_soft(by_key, vec![(1, 'a'), (4, 'b'), (4, 'c')], 1);
        assert_eq!(top, vec![(4, 'b')]);
    }
}
