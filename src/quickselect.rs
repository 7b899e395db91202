//! Quickselect for the k greatest elements
//!
//! Partitions a slice in place around middle-index pivots until the `k`
//! greatest elements occupy its prefix. Each round makes one three-way pass,
//! so runs of equal elements terminate the search instead of degrading it.
//!
//! Expected O(n) comparisons. Middle-index pivots are deterministic, so
//! adversarial orderings can still force O(n²).

use std::cmp::Ordering;

/// Rearranges `items` so that `items[..k]` holds its `k` greatest elements
///
/// The prefix is left in no particular order. Does nothing when `k` is zero
/// or at least `items.len()`.
pub fn select_greatest<E, C>(items: &mut [E], k: usize, cmp: &C)
where
    C: Fn(&E, &E) -> Ordering,
{
    let (mut lo, mut hi) = (0, items.len());
    while lo < k && k < hi {
        items.swap(lo, lo + (hi - lo) / 2);
        let (greater_end, equal_end) = partition(&mut items[lo..hi], cmp);
        let (greater_end, equal_end) = (lo + greater_end, lo + equal_end);
        if k < greater_end {
            hi = greater_end;
        } else if k <= equal_end {
            return;
        } else {
            lo = equal_end;
        }
    }
}

/// Three-way partition around the pivot at `items[0]`
///
/// Afterwards `items[..g]` compares greater than the pivot, `items[g..e]`
/// equal to it and `items[e..]` less, where `(g, e)` is the return value.
fn partition<E, C>(items: &mut [E], cmp: &C) -> (usize, usize)
where
    C: Fn(&E, &E) -> Ordering,
{
    let (mut gt, mut i, mut lt) = (1, 1, items.len());
    while i < lt {
        match cmp(&items[i], &items[0]) {
            Ordering::Greater => {
                items.swap(gt, i);
                gt += 1;
                i += 1;
            }
            Ordering::Equal => i += 1,
            Ordering::Less => {
                lt -= 1;
                items.swap(i, lt);
            }
        }
    }
    items.swap(0, gt - 1);
    (gt - 1, i)
}

/// Returns the `k` greatest elements of `items`, greatest first
pub fn greatest_k<E, C>(mut items: Vec<E>, k: usize, cmp: &C) -> Vec<E>
where
    C: Fn(&E, &E) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    if k < items.len() {
        select_greatest(&mut items, k, cmp);
        items.truncate(k);
    }
    items.sort_by(|a, b| cmp(b, a));
    items
}
