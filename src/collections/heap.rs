//! Comparator-ordered binary heap.
//!
//! This module provides [`PriorityContainer`], an array-backed binary heap
//! whose order comes from a caller-supplied comparator rather than from
//! `Ord`. The root is always the item the comparator ranks highest.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `extract`  | O(log n)   |
//! | `peek`     | O(1)       |
//! | `len`      | O(1)       |
//!
//! # Ordering
//!
//! The comparator must describe a strict weak ordering. Items the comparator
//! calls `Equal` come out in an unspecified order: the heap is not stable.
//! A comparator that is not transitive produces an unspecified extraction
//! order but never panics.
//!
//! # Examples
//!
//! ```rust
//! use auxindex::collections::PriorityContainer;
//!
//! let mut heap = PriorityContainer::max_first();
//! heap.extend([5, 1, 8, 3]);
//!
//! assert_eq!(heap.peek(), Some(&8));
//! assert_eq!(heap.into_sorted_vec(), vec![8, 5, 3, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Comparator function pointer used by the `Ord`-based constructors.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A binary heap ordered by a caller-supplied comparator.
///
/// The item for which the comparator returns `Greater` against every other
/// item sits at the root and is the next one returned by [`extract`].
///
/// # Type Parameters
///
/// * `T` - The item type. No trait bounds are required.
/// * `F` - The comparator, `Fn(&T, &T) -> Ordering`.
///
/// # Examples
///
/// ```rust
/// use auxindex::collections::PriorityContainer;
///
/// // Rank by score, highest first.
/// let mut heap = PriorityContainer::new(|left: &(&str, i64), right: &(&str, i64)| {
///     left.1.cmp(&right.1)
/// });
/// heap.insert(("a", 3));
/// heap.insert(("b", 7));
/// heap.insert(("c", -2));
///
/// assert_eq!(heap.extract(), Some(("b", 7)));
/// assert_eq!(heap.extract(), Some(("a", 3)));
/// assert_eq!(heap.extract(), Some(("c", -2)));
/// assert_eq!(heap.extract(), None);
/// ```
///
/// [`extract`]: PriorityContainer::extract
#[derive(Clone)]
pub struct PriorityContainer<T, F = Comparator<T>> {
    items: Vec<T>,
    compare: F,
}

impl<T: Ord> PriorityContainer<T> {
    /// Creates an empty heap that yields the largest item first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxindex::collections::PriorityContainer;
    ///
    /// let mut heap = PriorityContainer::max_first();
    /// heap.extend([1, 3, 2]);
    /// assert_eq!(heap.extract(), Some(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn max_first() -> Self {
        Self::new(T::cmp)
    }

    /// Creates an empty heap that yields the smallest item first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxindex::collections::PriorityContainer;
    ///
    /// let mut heap = PriorityContainer::min_first();
    /// heap.extend([1, 3, 2]);
    /// assert_eq!(heap.extract(), Some(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn min_first() -> Self {
        Self::new(|left: &T, right: &T| right.cmp(left))
    }
}

impl<T, F> PriorityContainer<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `compare`.
    #[inline]
    #[must_use]
    pub const fn new(compare: F) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with room for `capacity` items.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Adds an item to the heap.
    ///
    /// The item is appended and then moved toward the root for as long as
    /// the comparator ranks it strictly above its parent.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the highest-ranked item.
    ///
    /// Returns `None` when the heap is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxindex::collections::PriorityContainer;
    ///
    /// let mut heap: PriorityContainer<i32> = PriorityContainer::max_first();
    /// assert_eq!(heap.extract(), None);
    ///
    /// heap.insert(4);
    /// assert_eq!(heap.extract(), Some(4));
    /// assert!(heap.is_empty());
    /// ```
    pub fn extract(&mut self) -> Option<T> {
        let last = self.items.pop()?;
        if self.items.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.items[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Returns the highest-ranked item without removing it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the number of items in the heap.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the items in heap-array order.
    ///
    /// Only the first item is guaranteed to be the highest-ranked one.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a snapshot of the heap array.
    ///
    /// The snapshot is in heap-array order, not extraction order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Drains the heap into a vector in extraction order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxindex::collections::PriorityContainer;
    ///
    /// let mut heap = PriorityContainer::min_first();
    /// heap.extend(["pear", "apple", "fig"]);
    /// assert_eq!(heap.into_sorted_vec(), vec!["apple", "fig", "pear"]);
    /// ```
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.extract() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.compare)(&self.items[index], &self.items[parent]) != Ordering::Greater {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let length = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= length {
                break;
            }
            let right = left + 1;
            let mut chosen = left;
            if right < length
                && (self.compare)(&self.items[right], &self.items[left]) == Ordering::Greater
            {
                chosen = right;
            }
            if (self.compare)(&self.items[index], &self.items[chosen]) != Ordering::Less {
                break;
            }
            self.items.swap(index, chosen);
            index = chosen;
        }
    }
}

impl<T, F> Extend<T> for PriorityContainer<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, F> IntoIterator for &'a PriorityContainer<T, F> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityContainer<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PriorityContainer")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
