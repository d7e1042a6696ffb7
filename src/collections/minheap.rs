// Copyright (c) 2016, 2017, 2020, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Binary min-heap with an injected comparator.
//!
//! In contrast to [`std::collections::BinaryHeap`] the order is not taken from
//! an `Ord` implementation of the element type but from a separate
//! [`Comparator`]. The comparator only receives references, so large elements
//! are never copied for a comparison.
//!
//! There is no removal by key and no decrease-key operation. Algorithms that
//! need to lower the priority of an element simply push it again and skip the
//! outdated copy when it is popped.
//!
//! The relative order of elements comparing as equal is unspecified.
//!
//! # Example
//!
//! ```
//! use rs_path::collections::MinHeap;
//!
//! // a max-heap by reversing the comparison
//! let mut heap = MinHeap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), None);
//! ```

use std::cmp::Ordering;

/// A total preorder on the elements of a [`MinHeap`].
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (*self)(a, b)
    }
}

/// The order given by `PartialOrd`.
///
/// Incomparable elements (e.g. NaN) are treated as equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: PartialOrd,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Array backed binary min-heap.
pub struct MinHeap<T, C = NaturalOrder> {
    /// The heap elements, the root is at index 0.
    heap: Vec<T>,
    /// The element order.
    cmp: C,
}

impl<T> MinHeap<T>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> Default for MinHeap<T, C>
where
    C: Default,
{
    fn default() -> Self {
        MinHeap {
            heap: vec![],
            cmp: C::default(),
        }
    }
}

impl<T, C> MinHeap<T, C>
where
    C: Comparator<T>,
{
    /// Return an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        MinHeap { heap: vec![], cmp }
    }

    /// Return the number of elements on the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Return `true` iff the heap contains no element.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove all elements.
    ///
    /// The allocated memory is kept for later use.
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Return the comparator of this heap.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Return a reference to the smallest element.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Push a new element onto the heap.
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.upheap(self.heap.len() - 1);
    }

    /// Remove and return the smallest element or `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some(min)
    }

    /// Move the element at `pos` up until its parent is not larger.
    fn upheap(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            // equal parents are passed, the newest of equal elements tends to come first
            if self.cmp.compare(&self.heap[pos], &self.heap[parent]) == Ordering::Greater {
                break;
            }
            self.heap.swap(pos, parent);
            pos = parent;
        }
    }

    /// Move the element at `pos` down until no child is smaller.
    fn downheap(&mut self, mut pos: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let next = if left >= n {
                break;
            } else if right >= n
                || self.cmp.compare(&self.heap[left], &self.heap[right]) == Ordering::Less
            {
                left
            } else {
                right
            };

            if self.cmp.compare(&self.heap[pos], &self.heap[next]) != Ordering::Greater {
                break;
            }
            self.heap.swap(pos, next);
            pos = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MinHeap;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Ordering;

    #[test]
    fn test_sorted_output() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut heap = MinHeap::new();
        let mut values: Vec<u32> = (0..500).map(|_| rng.random_range(0..100)).collect();
        for &x in &values {
            heap.push(x);
        }
        assert_eq!(heap.len(), values.len());

        values.sort();
        let mut popped = vec![];
        while let Some(x) = heap.pop() {
            popped.push(x);
        }
        assert_eq!(popped, values);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_interleaved() {
        let mut heap = MinHeap::new();
        heap.push(5);
        heap.push(3);
        assert_eq!(heap.pop(), Some(3));
        heap.push(1);
        heap.push(4);
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(4));
        heap.push(0);
        assert_eq!(heap.pop(), Some(0));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_comparator_by_key() {
        // largest first by reversing the comparator
        let mut heap = MinHeap::with_comparator(|a: &(f64, char), b: &(f64, char)| {
            b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal)
        });
        heap.push((1.5, 'a'));
        heap.push((7.0, 'b'));
        heap.push((3.25, 'c'));
        assert_eq!(heap.pop().map(|x| x.1), Some('b'));
        assert_eq!(heap.pop().map(|x| x.1), Some('c'));
        assert_eq!(heap.pop().map(|x| x.1), Some('a'));
    }

    #[test]
    fn test_clear() {
        let mut heap = MinHeap::new();
        for i in (0..10).rev() {
            heap.push(i);
        }
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
        heap.push(2);
        assert_eq!(heap.pop(), Some(2));
    }
}
