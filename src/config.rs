//! Error-bound configuration for soft heaps and soft selection
//!
//! A soft heap is parameterised by a single error bound ε. Everything else is
//! derived from it:
//!
//! - the rank cutoff `R = 5 + ceil(log2(1/ε))`, at or below which nodes hold
//!   exactly one element and are never corrupted
//! - the target list size of each rank: `1` up to `R`, then
//!   `target(r) = floor((3 * target(r - 1) + 1) / 2)`
//!
//! [`SelectConfig`] adds the choice of exact resolver used by
//! [`greatest_k_soft_with`](crate::select::greatest_k_soft_with).

use crate::error::SoftHeapError;

/// Error bound used when none is given
pub const DEFAULT_EPSILON: f64 = 0.125;

/// Validated error bound and the rank cutoff derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftHeapConfig {
    epsilon: f64,
    rank_cutoff: u32,
}

impl SoftHeapConfig {
    /// Creates a configuration for the error bound `epsilon`
    ///
    /// # Errors
    /// Returns [`SoftHeapError::InvalidEpsilon`] unless `0 < epsilon < 1`.
    pub fn new(epsilon: f64) -> Result<Self, SoftHeapError> {
        if !(epsilon > 0.0 && epsilon < 1.0) {
            return Err(SoftHeapError::InvalidEpsilon(epsilon));
        }
        let rank_cutoff = 5u32.saturating_add((-epsilon.log2()).ceil() as u32);
        Ok(Self {
            epsilon,
            rank_cutoff,
        })
    }

    /// The error bound ε
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The rank `R` at or below which nodes are never corrupted
    pub fn rank_cutoff(&self) -> u32 {
        self.rank_cutoff
    }

    /// Target list size for a node of the given rank
    pub fn target_size(&self, rank: u32) -> usize {
        (self.rank_cutoff + 1..=rank).fold(1, |size, _| grow_target(size))
    }
}

impl Default for SoftHeapConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            rank_cutoff: 8,
        }
    }
}

/// Target size of rank `r + 1` given the target size of rank `r > R`
pub(crate) fn grow_target(size: usize) -> usize {
    size.saturating_mul(3).saturating_add(1) / 2
}

/// Exact strategy used to resolve the soft heap's surviving candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolver {
    /// Partition the candidates in place
    #[default]
    Quickselect,
    /// Stream the candidates through a bounded heap
    BoundedHeap,
}

/// Configuration for soft-heap selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectConfig {
    heap: SoftHeapConfig,
    resolver: Resolver,
}

impl SelectConfig {
    /// Creates a selection configuration with the given error bound
    ///
    /// # Errors
    /// Returns [`SoftHeapError::InvalidEpsilon`] for a bound outside `(0, 1)`
    /// and [`SoftHeapError::SelectEpsilonTooLarge`] for a bound of one half or
    /// more.
    pub fn new(epsilon: f64) -> Result<Self, SoftHeapError> {
        let heap = SoftHeapConfig::new(epsilon)?;
        if epsilon >= 0.5 {
            return Err(SoftHeapError::SelectEpsilonTooLarge(epsilon));
        }
        Ok(Self {
            heap,
            resolver: Resolver::default(),
        })
    }

    /// Replaces the exact resolver
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Configuration of the soft heap built during selection
    pub fn heap(&self) -> SoftHeapConfig {
        self.heap
    }

    /// The exact resolver applied to the surviving candidates
    pub fn resolver(&self) -> Resolver {
        self.resolver
    }

    /// Number of insertions after which the filtering heap is rebuilt
    ///
    /// Keeps `ε * insertions <= k`, so that at most k of the 2k retained
    /// elements are corrupted. The threshold is at least `2k`; it equals `2k`
    /// when ε is close to one half and k is small, and then every admitted
    /// element triggers a rebuild.
    pub fn rebuild_threshold(&self, k: usize) -> usize {
        (k as f64 / self.heap.epsilon).floor() as usize
    }
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            heap: SoftHeapConfig::default(),
            resolver: Resolver::default(),
        }
    }
}
