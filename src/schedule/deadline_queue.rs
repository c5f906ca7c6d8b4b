//! Min-heap of items keyed on their deadline.
//!
//! [`DeadlineQueue`] is the repeated-extraction counterpart to
//! [`next_task`](super::next_task). Comparisons look at the deadline
//! timestamp only; there is no secondary key, so items with equal deadlines
//! come out in whatever order the heap shape dictates.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek`        | O(1)       |

use super::work_item::{Deadline, WorkItem};

/// A min-heap ordered by [`Deadline::deadline`].
///
/// # Examples
///
/// ```rust
/// use auxindex::schedule::{DeadlineQueue, WorkItem};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
/// let mut queue = DeadlineQueue::new();
/// queue.insert(WorkItem::new("later", now + Duration::days(2)));
/// queue.insert(WorkItem::new("sooner", now + Duration::days(1)));
///
/// assert_eq!(queue.extract_min().map(|item| item.title), Some("sooner".to_string()));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DeadlineQueue<T = WorkItem> {
    items: Vec<T>,
}

impl<T: Deadline> DeadlineQueue<T> {
    /// Creates an empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of queued items.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item with the earliest deadline without removing it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Queues an item.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
    }

    /// Removes and returns the item with the earliest deadline.
    ///
    /// Returns `None` when the queue is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        let last = self.items.pop()?;
        if self.items.is_empty() {
            return Some(last);
        }
        let minimum = std::mem::replace(&mut self.items[0], last);
        self.sink_down(0);
        Some(minimum)
    }

    fn bubble_up(&mut self, mut index: usize) {
        let deadline = self.items[index].deadline();
        while index > 0 {
            let parent = (index - 1) / 2;
            if deadline >= self.items[parent].deadline() {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sink_down(&mut self, mut index: usize) {
        let length = self.items.len();
        let deadline = self.items[index].deadline();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = None;
            if left < length && self.items[left].deadline() < deadline {
                smallest = Some(left);
            }
            if right < length {
                let bound = smallest.map_or(deadline, |left| self.items[left].deadline());
                if self.items[right].deadline() < bound {
                    smallest = Some(right);
                }
            }
            let Some(child) = smallest else {
                break;
            };
            self.items.swap(index, child);
            index = child;
        }
    }
}

impl<T: Deadline> Default for DeadlineQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Deadline> Extend<T> for DeadlineQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Deadline> FromIterator<T> for DeadlineQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

// =============================================================================
// Tests
// =============================================================================
