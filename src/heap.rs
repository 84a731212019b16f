//! Fixed-capacity binary max-heap of [`Element`]s.
//!
//! Slots are stored 0-based (`parent = (i - 1) / 2`, children `2i + 1` and
//! `2i + 2`), while every index accepted or returned by the public API is
//! 1-based: slot 1 is the root and slot `len()` is the last occupied one.
//!
//! Equal keys carry no stability guarantee. Percolating up swaps on ties, so
//! an element may overtake an equal-keyed parent on its way to the root.

use std::fmt;

use log::{debug, trace};

use crate::element::Element;
use crate::error::{ArgumentError, HeapError, Result};

#[derive(Debug, Clone)]
pub struct Heap<T> {
    data: Vec<Element<T>>,
    capacity: usize,
}

impl<T> Heap<T> {
    /// Creates an empty heap that accepts at most `capacity` inserts.
    pub fn new(capacity: isize) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| HeapError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Storage grows on demand; `capacity` only bounds the number of inserts.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!("creating heap with capacity {}", capacity);
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Takes ownership of `elements` and rearranges them into a heap in
    /// linear time. The capacity equals the number of elements, so the
    /// resulting heap is full.
    pub fn build_heap(mut elements: Vec<Element<T>>) -> Self {
        let len = elements.len();
        debug!("building heap from {} elements", len);
        for i in (0..len / 2).rev() {
            Self::percolate_down(&mut elements, i);
        }
        Self {
            data: elements,
            capacity: len,
        }
    }

    /// Sorts `elements` by ascending key.
    pub fn heap_sort(elements: Vec<Element<T>>) -> Vec<Element<T>> {
        Self::build_heap(elements).into_sorted_vec()
    }

    /// Consumes the heap and returns its elements by ascending key.
    ///
    /// The maximum is repeatedly swapped behind the shrinking heap prefix,
    /// which is the same sequence of moves `delete_max` would make.
    pub fn into_sorted_vec(mut self) -> Vec<Element<T>> {
        debug!("sorting {} elements", self.data.len());
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            Self::percolate_down(&mut self.data[..end], 0);
        }
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element in 1-based slot `index`, if occupied.
    pub fn get(&self, index: usize) -> Option<&Element<T>> {
        index.checked_sub(1).and_then(|i| self.data.get(i))
    }

    /// Iterates over the occupied slots in storage order, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element<T>> {
        self.data.iter()
    }

    pub fn insert(&mut self, element: Element<T>) -> Result<()> {
        if self.is_full() {
            return Err(HeapError::HeapFull {
                capacity: self.capacity,
            });
        }
        trace!("insert key {}", element.key());
        self.data.push(element);
        let last = self.data.len() - 1;
        Self::percolate_up(&mut self.data, last);
        Ok(())
    }

    pub fn find_max(&self) -> Result<&Element<T>> {
        self.data.first().ok_or(HeapError::HeapEmpty)
    }

    /// Removes the maximum, filling the root with the last element and
    /// percolating it down.
    pub fn delete_max(&mut self) -> Result<Element<T>> {
        if self.data.is_empty() {
            return Err(HeapError::HeapEmpty);
        }
        let max = self.data.swap_remove(0);
        trace!("delete max key {}", max.key());
        Self::percolate_down(&mut self.data, 0);
        Ok(max)
    }

    /// Deletes the `k` largest elements and returns the last one removed,
    /// i.e. the k-th largest. This is not a peek: the heap shrinks by `k`.
    pub fn remove_kth_max(&mut self, k: usize) -> Result<Element<T>> {
        if self.data.is_empty() {
            return Err(HeapError::HeapEmpty);
        }
        if k == 0 || k > self.data.len() {
            return Err(ArgumentError::KOutOfRange {
                k,
                size: self.data.len(),
            }
            .into());
        }
        let mut kth = self.delete_max()?;
        for _ in 1..k {
            kth = self.delete_max()?;
        }
        Ok(kth)
    }

    pub fn increase_key(&mut self, index: usize, delta: i64) -> Result<()> {
        let pos = self.slot(index)?;
        let key = self.data[pos].key();
        let new_key = Self::check_delta(delta)
            .and_then(|_| key.checked_add(delta).ok_or(HeapError::KeyOverflow { key, delta }))?;
        trace!("increase key at slot {} from {} to {}", index, key, new_key);
        self.data[pos].set_key(new_key);
        Self::percolate_up(&mut self.data, pos);
        Ok(())
    }

    pub fn decrease_key(&mut self, index: usize, delta: i64) -> Result<()> {
        let pos = self.slot(index)?;
        let key = self.data[pos].key();
        let new_key = Self::check_delta(delta)
            .and_then(|_| key.checked_sub(delta).ok_or(HeapError::KeyOverflow { key, delta }))?;
        trace!("decrease key at slot {} from {} to {}", index, key, new_key);
        self.data[pos].set_key(new_key);
        Self::percolate_down(&mut self.data, pos);
        Ok(())
    }

    /// Removes and returns the element in 1-based slot `index`.
    ///
    /// The element is promoted all the way to the root as though its key
    /// exceeded every other key, then extracted with [`Heap::delete_max`].
    /// Its key is never rewritten, so the returned element is exactly what
    /// was stored, and a rejected index leaves the heap untouched.
    pub fn delete(&mut self, index: usize) -> Result<Element<T>> {
        let mut pos = self.slot(index)?;
        trace!("delete slot {}", index);
        while pos > 0 {
            let parent = (pos - 1) / 2;
            self.data.swap(pos, parent);
            pos = parent;
        }
        self.delete_max()
    }

    /// Checks that no occupied slot holds a larger key than its parent.
    pub fn satisfies_heap_property(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].key() >= self.data[i].key())
    }

    fn slot(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.data.len() {
            return Err(HeapError::InvalidIndex {
                index,
                size: self.data.len(),
            });
        }
        Ok(index - 1)
    }

    fn check_delta(delta: i64) -> Result<()> {
        if delta < 1 {
            return Err(HeapError::from(ArgumentError::NonPositiveDelta(delta)));
        }
        Ok(())
    }

    // Ties swap, so the loop runs while the parent is <= the moving element.
    fn percolate_up(data: &mut [Element<T>], mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if data[parent].key() > data[i].key() {
                return;
            }
            data.swap(i, parent);
            i = parent;
        }
    }

    fn percolate_down(data: &mut [Element<T>], mut i: usize) {
        let len = data.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                return;
            }
            let right = left + 1;
            let child = if right < len && data[right].key() > data[left].key() {
                right
            } else {
                left
            };
            if data[child].key() <= data[i].key() {
                return;
            }
            data.swap(i, child);
            i = child;
        }
    }
}

/// Renders the keys in storage order, e.g. `4, 1, 1`.
impl<T> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, element) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element.key())?;
        }
        Ok(())
    }
}
