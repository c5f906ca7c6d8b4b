//! Checks run before a new task is accepted into the list.

use super::error::ScheduleError;
use super::work_item::WorkItem;

/// Checks that a task is complete enough to schedule.
///
/// A task needs a non-blank title and both window bounds, and its start must
/// be strictly before its end.
///
/// # Errors
///
/// Returns the first failing [`ScheduleError`], checked in the order
/// title, start, end, window.
///
/// # Examples
///
/// ```rust
/// use auxindex::schedule::{ScheduleError, WorkItem, validate};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 8, 1, 10, 0, 0).unwrap();
/// let item = WorkItem::new("review", now).with_window(now, now + Duration::hours(1));
/// assert!(validate(&item).is_ok());
///
/// let backwards = WorkItem::new("review", now).with_window(now, now);
/// assert!(matches!(validate(&backwards), Err(ScheduleError::InvalidWindow { .. })));
/// ```
pub fn validate(item: &WorkItem) -> Result<(), ScheduleError> {
    let result = check(item);
    if let Err(error) = &result {
        tracing::debug!(title = %item.title, %error, "rejected task");
    }
    result
}

fn check(item: &WorkItem) -> Result<(), ScheduleError> {
    if item.title.trim().is_empty() {
        return Err(ScheduleError::MissingTitle);
    }
    let start = item.start_time.ok_or(ScheduleError::MissingStartTime)?;
    let end = item.end_time.ok_or(ScheduleError::MissingEndTime)?;
    if start >= end {
        return Err(ScheduleError::InvalidWindow { start, end });
    }
    Ok(())
}

/// Returns `true` if `items` already holds a task with the same title
/// (case-insensitive) starting at the same instant as `candidate`.
///
/// Starts are compared through [`WorkItem::start`], so a task without a
/// window is compared by its fallback time.
#[must_use]
pub fn is_duplicate(candidate: &WorkItem, items: &[WorkItem]) -> bool {
    let title = candidate.title.to_lowercase();
    let start = candidate.start();
    items
        .iter()
        .any(|item| item.start() == start && item.title.to_lowercase() == title)
}

// =============================================================================
// Tests
// =============================================================================
