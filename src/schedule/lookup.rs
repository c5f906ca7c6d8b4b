//! Read-only queries over a task list.

use chrono::{DateTime, Duration, Utc};

use super::work_item::WorkItem;

/// Summary counts for a task list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Number of tasks marked done.
    pub completed: usize,
    /// Number of tasks not yet done.
    pub pending: usize,
}

impl TaskStats {
    /// Counts the tasks in `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxindex::schedule::{TaskStats, WorkItem};
    /// use chrono::Utc;
    ///
    /// let now = Utc::now();
    /// let items = vec![WorkItem::new("a", now), WorkItem::new("b", now).completed()];
    /// let stats = TaskStats::from_items(&items);
    /// assert_eq!((stats.total, stats.completed, stats.pending), (2, 1, 1));
    /// ```
    #[must_use]
    pub fn from_items(items: &[WorkItem]) -> Self {
        let completed = items.iter().filter(|item| item.done).count();
        Self {
            total: items.len(),
            completed,
            pending: items.len() - completed,
        }
    }
}

/// Sorts tasks by lowercased title, the order [`find_by_title`] expects.
pub fn sort_by_title(items: &mut [WorkItem]) {
    items.sort_by_cached_key(|item| item.title.to_lowercase());
}

/// Finds a task by exact title, ignoring case, using binary search.
///
/// `sorted` must be ordered by lowercased title (see [`sort_by_title`]);
/// on an unsorted slice the result is unspecified. If several tasks share
/// the title, any one of them may be returned.
///
/// # Examples
///
/// ```rust
/// use auxindex::schedule::{WorkItem, find_by_title, sort_by_title};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let mut items = vec![
///     WorkItem::new("Yoga", now),
///     WorkItem::new("budget", now),
///     WorkItem::new("Laundry", now),
/// ];
/// sort_by_title(&mut items);
///
/// assert_eq!(find_by_title(&items, "LAUNDRY").map(|item| item.title.as_str()), Some("Laundry"));
/// assert!(find_by_title(&items, "dishes").is_none());
/// ```
#[must_use]
pub fn find_by_title<'a>(sorted: &'a [WorkItem], title: &str) -> Option<&'a WorkItem> {
    let target = title.to_lowercase();
    sorted
        .binary_search_by(|item| item.title.to_lowercase().cmp(&target))
        .ok()
        .map(|index| &sorted[index])
}

/// Returns the tasks whose title or description contains `query`,
/// ignoring case. An empty query matches every task.
#[must_use]
pub fn search<'a>(items: &'a [WorkItem], query: &str) -> Vec<&'a WorkItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Returns the tasks that still need a reminder, with the time left.
///
/// A task qualifies when its reminder is enabled, it is not done, and its
/// deadline is strictly after `now`. Results keep the order of `items`.
///
/// # Examples
///
/// ```rust
/// use auxindex::schedule::{WorkItem, pending_reminders};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 9, 9, 9, 0, 0).unwrap();
/// let items = vec![
///     WorkItem::new("soon", now).with_end_time(now + Duration::minutes(10)),
///     WorkItem::new("past", now).with_end_time(now - Duration::minutes(10)),
///     WorkItem::new("muted", now).with_end_time(now + Duration::hours(1)).with_reminder(false),
/// ];
///
/// let reminders = pending_reminders(&items, now);
/// assert_eq!(reminders.len(), 1);
/// assert_eq!(reminders[0].1, Duration::minutes(10));
/// ```
#[must_use]
pub fn pending_reminders(items: &[WorkItem], now: DateTime<Utc>) -> Vec<(&WorkItem, Duration)> {
    let reminders: Vec<(&WorkItem, Duration)> = items
        .iter()
        .filter(|item| item.reminder && !item.done)
        .map(|item| (item, item.time_until_end(now)))
        .filter(|(_, remaining)| *remaining > Duration::zero())
        .collect();
    tracing::debug!(count = reminders.len(), "collected pending reminders");
    reminders
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 9, 9, 0, 0).unwrap()
    }

    #[rstest]
    fn test_stats_on_empty_list() {
        assert_eq!(TaskStats::from_items(&[]), TaskStats::default());
    }

    #[rstest]
    fn test_stats_counts(now: DateTime<Utc>) {
        let items = vec![
            WorkItem::new("a", now).completed(),
            WorkItem::new("b", now),
            WorkItem::new("c", now),
        ];
        assert_eq!(
            TaskStats::from_items(&items),
            TaskStats {
                total: 3,
                completed: 1,
                pending: 2
            }
        );
    }

    #[rstest]
    #[case("alpha", true)]
    #[case("ALPHA", true)]
    #[case("Delta", true)]
    #[case("bravo", false)]
    fn test_find_by_title(now: DateTime<Utc>, #[case] title: &str, #[case] found: bool) {
        let mut items: Vec<WorkItem> = ["delta", "Alpha", "charlie", "echo"]
            .into_iter()
            .map(|title| WorkItem::new(title, now))
            .collect();
        sort_by_title(&mut items);
        assert_eq!(find_by_title(&items, title).is_some(), found);
    }

    #[rstest]
    fn test_find_by_title_on_empty_slice() {
        assert!(find_by_title(&[], "anything").is_none());
    }

    #[rstest]
    fn test_search_matches_title_or_description(now: DateTime<Utc>) {
        let items = vec![
            WorkItem::new("Pay rent", now),
            WorkItem::new("Call", now).with_description("ask about RENT increase"),
            WorkItem::new("Walk dog", now),
        ];
        let titles: Vec<&str> = search(&items, "rent")
            .into_iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Pay rent", "Call"]);
        assert_eq!(search(&items, "").len(), 3);
    }

    #[rstest]
    fn test_reminders_skip_done_and_expired(now: DateTime<Utc>) {
        let items = vec![
            WorkItem::new("done", now)
                .with_end_time(now + Duration::hours(1))
                .completed(),
            WorkItem::new("at now", now),
            WorkItem::new("later", now).with_end_time(now + Duration::hours(2)),
        ];
        let reminders = pending_reminders(&items, now);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].0.title, "later");
        assert_eq!(reminders[0].1, Duration::hours(2));
    }
}
