//! Scenario and boundary tests for the selection strategies

use soft_heap_select::bounded::BoundedHeap;
use soft_heap_select::{
    greatest_k_heap, greatest_k_quick, greatest_k_soft, greatest_k_soft_with, ComparisonCounter,
    Resolver, SelectConfig,
};
use std::cmp::Ordering;

/// Runs all three strategies and checks that they agree
fn all_strategies<E, C>(cmp: C, input: &[E], k: usize) -> Vec<E>
where
    E: Clone + PartialEq + std::fmt::Debug,
    C: Fn(&E, &E) -> Ordering + Copy,
{
    let heap = greatest_k_heap(cmp, input.to_vec(), k);
    let quick = greatest_k_quick(cmp, input.to_vec(), k);
    let soft = greatest_k_soft(cmp, input.to_vec(), k);
    assert_eq!(heap, quick, "heap and quickselect disagree for k = {k}");
    assert_eq!(heap, soft, "heap and soft disagree for k = {k}");
    heap
}

#[test]
fn test_small_scenario() {
    assert_eq!(all_strategies(i32::cmp, &[5, 3, 8, 1, 9, 2], 3), vec![9, 8, 5]);
}

#[test]
fn test_k_zero() {
    assert!(all_strategies(i32::cmp, &[5, 3, 8], 0).is_empty());
}

#[test]
fn test_k_at_least_len() {
    let input = [4, 1, 3, 2];
    assert_eq!(all_strategies(i32::cmp, &input, 4), vec![4, 3, 2, 1]);
    assert_eq!(all_strategies(i32::cmp, &input, 100), vec![4, 3, 2, 1]);
}

#[test]
fn test_empty_input() {
    for k in [0, 1, 2, 10] {
        assert!(all_strategies(i32::cmp, &[], k).is_empty());
    }
}

#[test]
fn test_k_max_value() {
    assert_eq!(all_strategies(i32::cmp, &[3, 1, 2], usize::MAX), vec![3, 2, 1]);
    assert_eq!(all_strategies(i32::cmp, &[3, 1, 2], usize::MAX / 2), vec![3, 2, 1]);

    let config = SelectConfig::default().with_resolver(Resolver::BoundedHeap);
    assert_eq!(
        greatest_k_soft_with(&config, i32::cmp, vec![3, 1, 2], usize::MAX),
        vec![3, 2, 1]
    );
    let input: Vec<i32> = (0..100).collect();
    let mut expected = input.clone();
    expected.reverse();
    assert_eq!(
        greatest_k_soft_with(&config, i32::cmp, input, usize::MAX / 2),
        expected
    );
}

#[test]
fn test_single_element() {
    assert_eq!(all_strategies(i32::cmp, &[42], 1), vec![42]);
    assert_eq!(all_strategies(i32::cmp, &[42], 3), vec![42]);
}

#[test]
fn test_duplicates() {
    let input = [7, 7, 1, 7, 3, 7, 3];
    assert_eq!(all_strategies(i32::cmp, &input, 5), vec![7, 7, 7, 7, 3]);
}

#[test]
fn test_reversed_comparator() {
    let rev = |a: &i32, b: &i32| b.cmp(a);
    assert_eq!(all_strategies(rev, &[5, 3, 8, 1, 9, 2], 2), vec![1, 2]);
}

#[test]
fn test_strings() {
    let words: Vec<String> = "the quick brown fox jumps over the lazy dog"
        .split(' ')
        .map(String::from)
        .collect();
    let top = all_strategies(String::cmp, &words, 3);
    assert_eq!(top, vec!["the", "the", "quick"]);
}

#[derive(Debug, Clone, PartialEq)]
struct Player {
    name: &'static str,
    score: u32,
}

#[test]
fn test_struct_keyed_by_field() {
    let players = [
        Player { name: "ana", score: 31 },
        Player { name: "bo", score: 77 },
        Player { name: "cy", score: 12 },
        Player { name: "di", score: 58 },
        Player { name: "ed", score: 90 },
    ];
    let by_score = |a: &Player, b: &Player| a.score.cmp(&b.score);
    let names: Vec<&str> = all_strategies(by_score, &players, 2)
        .iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["ed", "bo"]);
}

#[test]
fn test_k_one_uses_n_minus_one_comparisons() {
    let input: Vec<i32> = (0..1000).map(|i| (i * 31) % 997).collect();
    let counter = ComparisonCounter::new();

    let top = greatest_k_heap(counter.wrap(i32::cmp), input.clone(), 1);
    assert_eq!(top, vec![996]);
    assert_eq!(counter.comparisons(), 999);

    counter.reset();
    let top = greatest_k_soft(counter.wrap(i32::cmp), input, 1);
    assert_eq!(top, vec![996]);
    assert_eq!(counter.comparisons(), 999);
}

#[test]
fn test_soft_filter_rejects_with_one_comparison() {
    // After the build phase every element is below the heap minimum
    let k = 10;
    let n = 5000;
    let input: Vec<i32> = (0..n).rev().collect();
    let counter = ComparisonCounter::new();
    let top = greatest_k_soft(counter.wrap(i32::cmp), input, k);
    assert_eq!(top, (n - 10..n).rev().collect::<Vec<_>>());

    let filtered = (n as u64) - 2 * k as u64;
    assert!(counter.comparisons() >= filtered);
    assert!(counter.comparisons() < filtered + 2_000);
}

#[test]
fn test_bounded_heap_resolver() {
    let config = SelectConfig::new(0.2)
        .unwrap()
        .with_resolver(Resolver::BoundedHeap);
    let input: Vec<u64> = (0..3000).map(|i| (i * 2654435761) % 10007).collect();
    let mut expected = input.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    expected.truncate(25);
    assert_eq!(greatest_k_soft_with(&config, u64::cmp, input, 25), expected);
}

#[test]
fn test_iterator_input() {
    let evens = (0..100).filter(|x| x % 2 == 0);
    assert_eq!(greatest_k_soft(i32::cmp, evens, 3), vec![98, 96, 94]);
    assert_eq!(greatest_k_quick(i32::cmp, 0..5, 2), vec![4, 3]);
}

#[test]
fn test_bounded_heap_direct() {
    let mut heap = BoundedHeap::new(2, |a: &f64, b: &f64| a.total_cmp(b));
    for x in [0.5, -1.0, 2.25, 1.5] {
        heap.offer(x);
    }
    assert_eq!(heap.into_sorted_desc(), vec![2.25, 1.5]);
}
