//! Soft Heap implementation
//!
//! A soft heap is a meldable priority queue that is allowed to *corrupt* keys:
//! a retained element may be reported under a key larger than its own value.
//! In exchange, every operation uses amortized O(log 1/ε) comparisons, which is
//! below what an exact comparison-based heap can achieve.
//!
//! # Algorithm Overview
//!
//! The heap is a list of binary trees ordered by rank, in the style of the
//! binomial-heap carry discipline:
//!
//! - Each node carries a current key `ckey` and a list of elements whose values
//!   are all `<= ckey`. Children have keys `>=` their parent's key.
//! - Nodes of rank `<= R` hold exactly one element, so their key is exact.
//! - Above `R`, a node's target list size grows by a factor of 3/2 per rank.
//!   When a node's list falls far enough below its target it *sifts*: it takes
//!   the whole list of its lower-keyed child and adopts that child's key. The
//!   absorbed elements now sit under a key that may exceed their own value,
//!   which is the only source of corruption.
//!
//! **Invariant**: at any moment at most `ε * n` retained elements are
//! corrupted, where `n` is the number of insertions so far.
//!
//! **Root list**: trees sit in a heap-owned arena and are linked through
//! `prev`/`next` keys in non-decreasing rank order, with at most two trees per
//! rank. Each tree caches the tree holding the minimum key among itself and its
//! successors. Structural changes invalidate the cache from the point of change
//! back to the head; it is recomputed on the next access.
//!
//! # Example
//!
//! ```rust
//! use soft_heap_select::soft_heap::SoftHeap;
//!
//! let mut heap = SoftHeap::natural();
//! heap.extend([5, 1, 9, 3]);
//! assert_eq!(heap.len(), 4);
//! assert_eq!(heap.peek_key(), Some(&1));
//! assert_eq!(heap.extract_min(), Ok(1));
//! ```

use crate::config::{grow_target, SoftHeapConfig};
use crate::error::SoftHeapError;
use slotmap::{new_key_type, SlotMap};
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

new_key_type! {
    /// Key of a tree in a heap's root-list arena
    struct TreeKey;
}

/// Node of a soft heap tree
///
/// - `ckey`: current key, `>=` every element in `list`
/// - `list`: retained elements, in no particular order
/// - `rank`: height class; children always have rank `rank - 1`
/// - `target`: list size the node tries to keep
/// - `left`, `right`: owned children, never with an empty list
struct Node<E> {
    ckey: E,
    list: Vec<E>,
    rank: u32,
    target: usize,
    left: Option<Box<Node<E>>>,
    right: Option<Box<Node<E>>>,
}

impl<E: Clone> Node<E> {
    fn singleton(elem: E) -> Box<Self> {
        Box::new(Node {
            ckey: elem.clone(),
            list: vec![elem],
            rank: 0,
            target: 1,
            left: None,
            right: None,
        })
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Links two trees of equal rank under a new root of rank + 1
    fn combine<C>(left: Box<Self>, right: Box<Self>, rank_cutoff: u32, cmp: &C) -> Box<Self>
    where
        C: Fn(&E, &E) -> Ordering,
    {
        debug_assert_eq!(left.rank, right.rank);
        let rank = left.rank + 1;
        let target = if rank <= rank_cutoff {
            1
        } else {
            grow_target(left.target)
        };
        let (low, high) = if cmp(&left.ckey, &right.ckey) == Ordering::Greater {
            (right, left)
        } else {
            (left, right)
        };
        let (ckey, list, rest) = low.drain(cmp);
        let mut node = Box::new(Node {
            ckey,
            list,
            rank,
            target,
            left: rest,
            right: Some(high),
        });
        node.sift(cmp);
        node
    }

    /// Pulls lists up from the lower-keyed child until the target is met
    fn sift<C>(&mut self, cmp: &C)
    where
        C: Fn(&E, &E) -> Ordering,
    {
        while self.list.len() < self.target && !self.is_leaf() {
            let swap = match (&self.left, &self.right) {
                (None, _) => true,
                (Some(left), Some(right)) => cmp(&left.ckey, &right.ckey) == Ordering::Greater,
                (Some(_), None) => false,
            };
            if swap {
                mem::swap(&mut self.left, &mut self.right);
            }
            let Some(child) = self.left.take() else {
                break;
            };
            let (ckey, mut list, rest) = child.drain(cmp);
            if self.list.is_empty() {
                self.list = list;
            } else {
                self.list.append(&mut list);
            }
            self.ckey = ckey;
            self.left = rest;
        }
    }

    /// Takes this node's key and list, refilling or discarding the node
    ///
    /// Returns `None` in place of the node when it was a leaf, since an empty
    /// leaf has nothing left to give.
    fn drain<C>(mut self: Box<Self>, cmp: &C) -> (E, Vec<E>, Option<Box<Self>>)
    where
        C: Fn(&E, &E) -> Ordering,
    {
        if self.is_leaf() {
            let node = *self;
            return (node.ckey, node.list, None);
        }
        let list = mem::take(&mut self.list);
        let ckey = self.ckey.clone();
        self.sift(cmp);
        (ckey, list, Some(self))
    }
}

impl<E> Node<E> {
    fn children(&self) -> impl Iterator<Item = &Node<E>> {
        self.left.iter().chain(self.right.iter()).map(|child| &**child)
    }

    /// Moves every element of the subtree into `out`
    fn drain_into(self: Box<Self>, out: &mut Vec<E>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            let Node {
                mut list,
                left,
                right,
                ..
            } = *node;
            out.append(&mut list);
            stack.extend(right);
            stack.extend(left);
        }
    }
}

/// Root-list entry
struct Tree<E> {
    root: Box<Node<E>>,
    prev: Option<TreeKey>,
    next: Option<TreeKey>,
    /// Tree with the smallest key among this one and its successors; `None`
    /// when stale
    suffix_min: Cell<Option<TreeKey>>,
}

/// Soft Heap
///
/// An approximate min-priority queue over elements ordered by the comparator
/// `C`. See the [module documentation](self) for the structure and its error
/// guarantee.
///
/// Elements must be `Clone`: a node's key is a copy of an element that may
/// already have been extracted.
///
/// # Example
///
/// ```rust
/// use soft_heap_select::soft_heap::SoftHeap;
///
/// let mut heap = SoftHeap::with_epsilon(|a: &i32, b: &i32| b.cmp(a), 0.25).unwrap();
/// heap.insert(3);
/// heap.insert(7);
/// // Reversed comparator: the "minimum" is the largest value
/// assert_eq!(heap.extract_min(), Ok(7));
/// ```
pub struct SoftHeap<E, C = fn(&E, &E) -> Ordering> {
    /// Arena holding the root list
    trees: SlotMap<TreeKey, Tree<E>>,
    /// Head of the root list (lowest rank)
    first: Option<TreeKey>,
    /// Largest rank reached by any tree
    rank: u32,
    /// Number of retained elements
    len: usize,
    /// Number of insertions the corruption bound is measured against
    insertions: usize,
    comparator: C,
    config: SoftHeapConfig,
}

impl<E: Ord + Clone> SoftHeap<E> {
    /// Creates an empty heap ordered by `Ord` with the default error bound
    pub fn natural() -> Self {
        Self::new(E::cmp)
    }
}

impl<E: Ord + Clone> Default for SoftHeap<E> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<E, C> SoftHeap<E, C>
where
    E: Clone,
    C: Fn(&E, &E) -> Ordering,
{
    /// Creates an empty heap with the default error bound
    pub fn new(comparator: C) -> Self {
        Self::with_config(comparator, SoftHeapConfig::default())
    }

    /// Creates an empty heap with error bound `epsilon`
    ///
    /// # Errors
    /// Returns [`SoftHeapError::InvalidEpsilon`] unless `0 < epsilon < 1`.
    pub fn with_epsilon(comparator: C, epsilon: f64) -> Result<Self, SoftHeapError> {
        Ok(Self::with_config(comparator, SoftHeapConfig::new(epsilon)?))
    }

    /// Creates an empty heap with an existing configuration
    pub fn with_config(comparator: C, config: SoftHeapConfig) -> Self {
        Self {
            trees: SlotMap::with_key(),
            first: None,
            rank: 0,
            len: 0,
            insertions: 0,
            comparator,
            config,
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of retained elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of insertions since creation or the last [`rebuild`](Self::rebuild)
    pub fn insertions(&self) -> usize {
        self.insertions
    }

    /// The error bound ε
    pub fn epsilon(&self) -> f64 {
        self.config.epsilon()
    }

    /// The configuration this heap was built with
    pub fn config(&self) -> SoftHeapConfig {
        self.config
    }

    /// Inserts an element
    ///
    /// **Time Complexity**: O(1) amortized
    ///
    /// **Algorithm**: meld with a singleton heap. The rank-0 tree goes to the
    /// head of the root list and carries into equal-rank neighbours, like
    /// incrementing a binary counter.
    pub fn insert(&mut self, elem: E) {
        let root = Node::singleton(elem);
        let head = self.first;
        self.attach(root, None, head);
        self.len += 1;
        self.insertions += 1;
        self.combine_from(0);
    }

    /// Melds `other` into this heap, consuming it
    ///
    /// **Time Complexity**: O(log n) when both heaps share a configuration
    ///
    /// Heaps with different error bounds cannot share trees, whose target sizes
    /// depend on the bound. In that case the donor's elements are inserted one
    /// at a time.
    pub fn meld(&mut self, mut other: Self) {
        if other.is_empty() {
            return;
        }
        if other.config != self.config {
            tracing::trace!(
                donor = other.len,
                receiver = self.len,
                "melding heaps with different error bounds by reinsertion"
            );
            self.extend(other.into_vec());
            return;
        }

        let limit = self.rank.min(other.rank);
        self.rank = self.rank.max(other.rank);
        self.len += other.len;
        self.insertions += other.insertions;

        // Both lists are rank-ordered; each donor tree goes right before the
        // first receiver tree of equal or higher rank.
        let mut donor = other.first.take();
        let mut before: Option<TreeKey> = None;
        let mut cursor = self.first;
        while let Some(key) = donor {
            let tree = other
                .trees
                .remove(key)
                .expect("donor root list references a live tree");
            donor = tree.next;
            while let Some(c) = cursor {
                if self.trees[c].root.rank >= tree.root.rank {
                    break;
                }
                before = Some(c);
                cursor = self.trees[c].next;
            }
            before = Some(self.attach(tree.root, before, cursor));
        }
        for tree in self.trees.values() {
            tree.suffix_min.set(None);
        }
        self.combine_from(limit);
    }

    /// Returns the current minimum key without removing anything
    ///
    /// The key may be corrupted: it is `>=` the value of the element the next
    /// [`extract_min`](Self::extract_min) returns.
    pub fn peek_key(&self) -> Option<&E> {
        self.min_tree().map(|key| &self.trees[key].root.ckey)
    }

    /// Removes and returns one element stored under the minimum key
    ///
    /// **Time Complexity**: O(log 1/ε) amortized comparisons
    ///
    /// # Errors
    /// Returns [`SoftHeapError::Empty`] if the heap has no elements; the heap
    /// is left unchanged.
    pub fn extract_min(&mut self) -> Result<E, SoftHeapError> {
        let key = self.min_tree().ok_or(SoftHeapError::Empty)?;
        let root = &mut self.trees[key].root;
        let elem = root.list.pop().ok_or(SoftHeapError::Empty)?;
        if root.list.len() * 2 <= root.target {
            if !root.is_leaf() {
                root.sift(&self.comparator);
                self.invalidate(key);
            } else if root.list.is_empty() {
                self.remove_tree(key);
            }
        }
        self.len -= 1;
        Ok(elem)
    }

    /// Reinserts every retained element into a fresh structure
    ///
    /// Afterwards no element is corrupted and [`insertions`](Self::insertions)
    /// equals [`len`](Self::len).
    pub fn rebuild(&mut self) {
        tracing::trace!(
            retained = self.len,
            insertions = self.insertions,
            "rebuilding soft heap"
        );
        let elems = self.take_elements();
        self.extend(elems);
    }

    /// Consumes the heap, returning every retained element
    ///
    /// Elements come out in pre-order over the trees of the root list.
    pub fn into_vec(mut self) -> Vec<E> {
        self.take_elements()
    }

    /// Iterates over every retained element in unspecified order
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            trees: &self.trees,
            next_tree: self.first,
            stack: Vec::new(),
            current: <&[E]>::default().iter(),
            remaining: self.len,
        }
    }

    /// Counts retained elements stored under a key strictly above their value
    ///
    /// Walks the whole heap; intended for tests and diagnostics.
    pub fn corrupted(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<E>> = self.roots().collect();
        while let Some(node) = stack.pop() {
            count += node
                .list
                .iter()
                .filter(|&elem| (self.comparator)(elem, &node.ckey) == Ordering::Less)
                .count();
            stack.extend(node.children());
        }
        count
    }

    /// Checks every structural invariant of the heap
    ///
    /// # Errors
    /// Returns [`SoftHeapError::InvariantViolated`] describing the first
    /// violation found.
    pub fn verify_invariants(&self) -> Result<(), SoftHeapError> {
        let fail = |reason: String| Err(SoftHeapError::InvariantViolated(reason));
        let mut counted = 0;
        let mut prev: Option<TreeKey> = None;
        let mut prev_rank: Option<u32> = None;
        let mut same_rank = 0;
        let mut cursor = self.first;
        while let Some(key) = cursor {
            let tree = &self.trees[key];
            if tree.prev != prev {
                return fail(format!("tree of rank {} has a stale prev link", tree.root.rank));
            }
            let rank = tree.root.rank;
            match prev_rank {
                Some(p) if p > rank => {
                    return fail(format!("rank {rank} follows rank {p} in the root list"))
                }
                Some(p) if p == rank => same_rank += 1,
                _ => same_rank = 1,
            }
            if same_rank > 2 {
                return fail(format!("more than two trees of rank {rank}"));
            }
            if tree.root.list.is_empty() {
                return fail(format!("root of rank {rank} has an empty list"));
            }
            if let Some(min) = tree.suffix_min.get() {
                self.check_suffix_min(key, min)?;
            }
            counted += self.check_subtree(&tree.root)?;
            prev = Some(key);
            prev_rank = Some(rank);
            cursor = tree.next;
        }
        if counted != self.len {
            return fail(format!("found {counted} elements, expected {}", self.len));
        }
        if self.trees.len() != self.roots().count() {
            return fail("arena holds trees outside the root list".to_string());
        }
        Ok(())
    }

    /// Checks one subtree, returning its element count
    fn check_subtree(&self, root: &Node<E>) -> Result<usize, SoftHeapError> {
        let cmp = &self.comparator;
        let mut count = 0;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let len = node.list.len();
            let rank = node.rank;
            if node.target != self.config.target_size(rank) {
                return Err(SoftHeapError::InvariantViolated(format!(
                    "node of rank {rank} has target {}, expected {}",
                    node.target,
                    self.config.target_size(rank)
                )));
            }
            let sized = if rank <= self.config.rank_cutoff() {
                len == 1
            } else {
                node.is_leaf() || (len * 2 >= node.target && len < 3 * node.target)
            };
            if !sized {
                return Err(SoftHeapError::InvariantViolated(format!(
                    "node of rank {rank} holds {len} elements with target {}",
                    node.target
                )));
            }
            if node
                .list
                .iter()
                .any(|elem| cmp(elem, &node.ckey) == Ordering::Greater)
            {
                return Err(SoftHeapError::InvariantViolated(format!(
                    "node of rank {rank} holds an element above its key"
                )));
            }
            for child in node.children() {
                if child.rank + 1 != rank {
                    return Err(SoftHeapError::InvariantViolated(format!(
                        "child of rank {} under node of rank {rank}",
                        child.rank
                    )));
                }
                if child.list.is_empty() {
                    return Err(SoftHeapError::InvariantViolated(format!(
                        "empty child under node of rank {rank}"
                    )));
                }
                if cmp(&child.ckey, &node.ckey) == Ordering::Less {
                    return Err(SoftHeapError::InvariantViolated(format!(
                        "child key below parent key at rank {rank}"
                    )));
                }
                stack.push(child);
            }
            count += len;
        }
        Ok(count)
    }

    /// Checks that a cached suffix minimum is really minimal
    fn check_suffix_min(&self, from: TreeKey, min: TreeKey) -> Result<(), SoftHeapError> {
        let min_key = &self.trees[min].root.ckey;
        let mut reached = false;
        let mut cursor = Some(from);
        while let Some(key) = cursor {
            let tree = &self.trees[key];
            reached |= key == min;
            if (self.comparator)(&tree.root.ckey, min_key) == Ordering::Less {
                return Err(SoftHeapError::InvariantViolated(
                    "cached suffix minimum is not minimal".to_string(),
                ));
            }
            cursor = tree.next;
        }
        if !reached {
            return Err(SoftHeapError::InvariantViolated(
                "cached suffix minimum precedes its tree".to_string(),
            ));
        }
        Ok(())
    }

    /// Runs the carry pass from the head of the root list
    ///
    /// Adjacent trees of equal rank are combined unless a third tree shares the
    /// rank, in which case the later pair is combined. Stops at the first tree
    /// above `limit` that has no equal-rank successor.
    fn combine_from(&mut self, limit: u32) {
        let Some(mut key) = self.first else {
            return;
        };
        while let Some(next) = self.trees[key].next {
            let rank = self.trees[key].root.rank;
            if self.trees[next].root.rank == rank {
                let third = self.trees[next]
                    .next
                    .map(|after| self.trees[after].root.rank);
                if third != Some(rank) {
                    key = self.combine_with_next(key);
                    continue;
                }
            } else if rank > limit {
                break;
            }
            key = next;
        }
        self.rank = self.rank.max(self.trees[key].root.rank);
        self.invalidate(key);
    }

    /// Replaces a tree and its successor with their combination
    fn combine_with_next(&mut self, key: TreeKey) -> TreeKey {
        let left = self.detach(key);
        let right_key = left.next.expect("combined tree has a successor");
        let right = self.detach(right_key);
        let root = Node::combine(
            left.root,
            right.root,
            self.config.rank_cutoff(),
            &self.comparator,
        );
        self.attach(root, right.prev, right.next)
    }

    /// Links a new tree between `prev` and `next`
    fn attach(&mut self, root: Box<Node<E>>, prev: Option<TreeKey>, next: Option<TreeKey>) -> TreeKey {
        let key = self.trees.insert(Tree {
            root,
            prev,
            next,
            suffix_min: Cell::new(None),
        });
        match prev {
            Some(p) => self.trees[p].next = Some(key),
            None => self.first = Some(key),
        }
        if let Some(n) = next {
            self.trees[n].prev = Some(key);
        }
        key
    }

    /// Unlinks a tree and removes it from the arena
    fn detach(&mut self, key: TreeKey) -> Tree<E> {
        let tree = self
            .trees
            .remove(key)
            .expect("root list references a live tree");
        match tree.prev {
            Some(p) => self.trees[p].next = tree.next,
            None => self.first = tree.next,
        }
        if let Some(n) = tree.next {
            self.trees[n].prev = tree.prev;
        }
        tree
    }

    /// Drops an exhausted tree and invalidates the caches before it
    fn remove_tree(&mut self, key: TreeKey) {
        let tree = self.detach(key);
        if let Some(p) = tree.prev {
            self.invalidate(p);
        }
        if self.first.is_none() {
            self.rank = 0;
        }
    }

    /// Marks the suffix minimum of `key` and every earlier tree as stale
    fn invalidate(&self, key: TreeKey) {
        let mut cursor = Some(key);
        while let Some(k) = cursor {
            let tree = &self.trees[k];
            tree.suffix_min.set(None);
            cursor = tree.prev;
        }
    }

    /// Tree holding the minimum key, recomputing stale caches
    ///
    /// Stale caches always form a prefix of the root list, so the walk goes
    /// forward to the last stale tree and fills caches back to the head.
    fn min_tree(&self) -> Option<TreeKey> {
        let first = self.first?;
        if let Some(min) = self.trees[first].suffix_min.get() {
            return Some(min);
        }
        let mut last_stale = first;
        while let Some(next) = self.trees[last_stale].next {
            if self.trees[next].suffix_min.get().is_some() {
                break;
            }
            last_stale = next;
        }
        let mut cursor = Some(last_stale);
        while let Some(key) = cursor {
            let tree = &self.trees[key];
            let best = match tree.next.and_then(|n| self.trees[n].suffix_min.get()) {
                Some(min)
                    if (self.comparator)(&tree.root.ckey, &self.trees[min].root.ckey)
                        == Ordering::Greater =>
                {
                    min
                }
                _ => key,
            };
            tree.suffix_min.set(Some(best));
            cursor = tree.prev;
        }
        self.trees[first].suffix_min.get()
    }

    fn roots(&self) -> impl Iterator<Item = &Node<E>> {
        let mut cursor = self.first;
        std::iter::from_fn(move || {
            let tree = &self.trees[cursor?];
            cursor = tree.next;
            Some(&*tree.root)
        })
    }

    /// Empties the heap, returning its elements in root-list pre-order
    fn take_elements(&mut self) -> Vec<E> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.first.take();
        while let Some(key) = cursor {
            let tree = self
                .trees
                .remove(key)
                .expect("root list references a live tree");
            cursor = tree.next;
            tree.root.drain_into(&mut out);
        }
        self.trees.clear();
        self.rank = 0;
        self.len = 0;
        self.insertions = 0;
        out
    }
}

impl<E, C> Extend<E> for SoftHeap<E, C>
where
    E: Clone,
    C: Fn(&E, &E) -> Ordering,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<E: Ord + Clone> FromIterator<E> for SoftHeap<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut heap = Self::natural();
        heap.extend(iter);
        heap
    }
}

impl<E, C> IntoIterator for SoftHeap<E, C>
where
    E: Clone,
    C: Fn(&E, &E) -> Ordering,
{
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, E, C> IntoIterator for &'a SoftHeap<E, C>
where
    E: Clone,
    C: Fn(&E, &E) -> Ordering,
{
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug, C> fmt::Debug for SoftHeap<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ranks = Vec::new();
        let mut cursor = self.first;
        while let Some(key) = cursor {
            ranks.push(self.trees[key].root.rank);
            cursor = self.trees[key].next;
        }
        f.debug_struct("SoftHeap")
            .field("len", &self.len)
            .field("epsilon", &self.config.epsilon())
            .field("insertions", &self.insertions)
            .field("ranks", &ranks)
            .finish()
    }
}

/// Borrowing iterator over a soft heap's retained elements
///
/// Created by [`SoftHeap::iter`].
pub struct Iter<'a, E> {
    trees: &'a SlotMap<TreeKey, Tree<E>>,
    next_tree: Option<TreeKey>,
    stack: Vec<&'a Node<E>>,
    current: std::slice::Iter<'a, E>,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        loop {
            if let Some(elem) = self.current.next() {
                self.remaining -= 1;
                return Some(elem);
            }
            if let Some(node) = self.stack.pop() {
                self.current = node.list.iter();
                self.stack.extend(node.right.as_deref());
                self.stack.extend(node.left.as_deref());
                continue;
            }
            let tree = &self.trees[self.next_tree?];
            self.next_tree = tree.next;
            self.stack.push(&tree.root);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}
