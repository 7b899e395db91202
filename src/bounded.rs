//! Bounded Binary Heap
//!
//! A fixed-capacity binary min-heap that retains the `k` greatest elements
//! offered to it. Ordering comes from a comparator rather than `Ord`, so the
//! same structure serves any total order.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `offer`            | O(log k)   |
//! | `peek_min`         | O(1)       |
//! | `into_sorted_desc` | O(k log k) |
//!
//! # Example
//!
//! ```rust
//! use soft_heap_select::bounded::BoundedHeap;
//!
//! let mut heap = BoundedHeap::new(2, i32::cmp);
//! heap.offer(3);
//! heap.offer(1);
//! heap.offer(5);
//! assert_eq!(heap.peek_min(), Some(&3));
//! assert_eq!(heap.into_sorted_desc(), vec![5, 3]);
//! ```

use std::cmp::Ordering;

/// Binary min-heap holding at most `capacity` elements
#[derive(Debug)]
pub struct BoundedHeap<E, C> {
    /// Heap-ordered elements; `data[0]` is the smallest held
    data: Vec<E>,
    capacity: usize,
    cmp: C,
}

impl<E, C> BoundedHeap<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    /// Creates an empty heap that keeps the `capacity` greatest elements
    ///
    /// Storage grows with the elements actually held, so `capacity` may exceed
    /// any real input size.
    pub fn new(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::new(),
            capacity,
            cmp,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of held elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the smallest held element
    pub fn peek_min(&self) -> Option<&E> {
        self.data.first()
    }

    /// Offers an element, returning whether it was kept
    ///
    /// Below capacity every element is kept. At capacity the element replaces
    /// the held minimum only if it compares strictly greater, so among equal
    /// elements the earliest offered stay.
    pub fn offer(&mut self, elem: E) -> bool {
        if self.data.len() < self.capacity {
            self.data.push(elem);
            self.sift_up(self.data.len() - 1);
            return true;
        }
        match self.data.first() {
            Some(min) if (self.cmp)(&elem, min) == Ordering::Greater => {
                self.data[0] = elem;
                self.sift_down(0);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the smallest held element
    pub fn pop_min(&mut self) -> Option<E> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Consumes the heap, returning the held elements greatest first
    pub fn into_sorted_desc(mut self) -> Vec<E> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(elem) = self.pop_min() {
            out.push(elem);
        }
        out.reverse();
        out
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.data[a], &self.data[b]) == Ordering::Less
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}
