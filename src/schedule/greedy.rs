//! Greedy selection over a task list.

use super::work_item::{Deadline, WorkItem};

/// Returns the item with the earliest deadline.
///
/// This is a single left-to-right reduction over `items`. An item only
/// replaces the current choice when its deadline is strictly earlier, so
/// among items that share the earliest deadline the first one wins.
/// Completed items are considered like any other.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use auxindex::schedule::{WorkItem, next_task};
/// use chrono::{TimeZone, Utc};
///
/// let noon = Utc.with_ymd_and_hms(2024, 2, 2, 12, 0, 0).unwrap();
/// let items = vec![WorkItem::new("first", noon), WorkItem::new("second", noon)];
///
/// assert_eq!(next_task(&items).map(|item| item.title.as_str()), Some("first"));
/// assert!(next_task::<WorkItem>(&[]).is_none());
/// ```
pub fn next_task<T: Deadline>(items: &[T]) -> Option<&T> {
    items.iter().fold(None, |earliest, item| match earliest {
        Some(current) if item.deadline() >= current.deadline() => Some(current),
        _ => Some(item),
    })
}

/// Picks a maximal set of tasks whose windows do not overlap.
///
/// Tasks are considered in order of deadline; a task is kept when it starts
/// at or after the deadline of the last kept task. Items with equal
/// deadlines keep their relative order. The result borrows from `items`.
///
/// # Examples
///
/// ```rust
/// use auxindex::schedule::{WorkItem, select_non_overlapping};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let day = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
/// let hours = |from: i64, to: i64| {
///     WorkItem::new(format!("{from}-{to}"), day)
///         .with_window(day + Duration::hours(from), day + Duration::hours(to))
/// };
/// let items = vec![hours(0, 3), hours(1, 2), hours(2, 4), hours(3, 5)];
///
/// let titles: Vec<&str> = select_non_overlapping(&items)
///     .into_iter()
///     .map(|item| item.title.as_str())
///     .collect();
/// assert_eq!(titles, vec!["1-2", "2-4"]);
/// ```
pub fn select_non_overlapping(items: &[WorkItem]) -> Vec<&WorkItem> {
    let mut by_deadline: Vec<&WorkItem> = items.iter().collect();
    by_deadline.sort_by_key(Deadline::deadline);

    let mut selected: Vec<&WorkItem> = Vec::new();
    for item in by_deadline {
        let fits = selected
            .last()
            .is_none_or(|last| item.start() >= last.deadline());
        if fits {
            selected.push(item);
        }
    }
    tracing::debug!(
        candidates = items.len(),
        selected = selected.len(),
        "selected non-overlapping tasks"
    );
    selected
}

// =============================================================================
// Tests
// =============================================================================
