//! Top-k Selection with Soft Heaps
//!
//! This crate computes the k greatest elements of a sequence under any total
//! order supplied as a comparator, with three strategies that trade comparison
//! count against latency.
//!
//! # Features
//!
//! - **Soft Heap**: a meldable priority queue that may corrupt a bounded
//!   fraction ε of its keys; O(1) amortized insert, O(log 1/ε) amortized extract-min
//! - **Bounded Heap**: exact top-k accumulator; O(n log k) comparisons
//! - **Quickselect**: exact in-place partitioning; O(n) expected comparisons
//! - **Soft Selection**: exact top-k through a soft-heap filter, using about one
//!   comparison per element on random input
//! - **Comparison Counting**: wrap any comparator to measure a strategy's cost
//!
//! # Example
//!
//! ```rust
//! use soft_heap_select::{greatest_k_soft, ComparisonCounter};
//!
//! let counter = ComparisonCounter::new();
//! let words = vec!["pear", "fig", "apple", "kiwi", "banana"];
//! let longest = greatest_k_soft(counter.wrap(|a: &&str, b: &&str| a.len().cmp(&b.len())), words, 2);
//! assert_eq!(longest, vec!["banana", "apple"]);
//! assert!(counter.comparisons() > 0);
//! ```

pub mod bounded;
pub mod config;
pub mod counting;
pub mod error;
pub mod quickselect;
pub mod select;
pub mod soft_heap;

// Re-export the main types for convenience
pub use config::{Resolver, SelectConfig, SoftHeapConfig, DEFAULT_EPSILON};
pub use counting::ComparisonCounter;
pub use error::SoftHeapError;
pub use select::{greatest_k_heap, greatest_k_quick, greatest_k_soft, greatest_k_soft_with};
pub use soft_heap::SoftHeap;
