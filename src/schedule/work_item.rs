//! The task record and its time-derived properties.

use chrono::{DateTime, Duration, Utc};

/// Anything that has a deadline.
///
/// The scheduling algorithms only look at this value. It is implemented for
/// [`WorkItem`] and for references to any implementor, so callers can queue
/// borrowed items without cloning.
pub trait Deadline {
    /// Returns the earliest time at which the item becomes urgent.
    fn deadline(&self) -> DateTime<Utc>;
}

impl<T: Deadline + ?Sized> Deadline for &T {
    #[inline]
    fn deadline(&self) -> DateTime<Utc> {
        (**self).deadline()
    }
}

/// Task priority as shown to the user. It does not affect ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

/// Display status derived from completion and the deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TaskStatus {
    /// The task is done.
    Completed,
    /// The task is not done and its deadline has passed.
    Overdue,
    /// The task is not done and its deadline is still ahead.
    Pending,
}

/// A task in a personal schedule.
///
/// `time` is the single timestamp older tasks carry; newer tasks also have a
/// `start_time` / `end_time` window. Wherever a window bound is missing,
/// `time` stands in for it.
///
/// # Examples
///
/// ```rust
/// use auxindex::schedule::{TaskStatus, WorkItem};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
/// let item = WorkItem::new("standup", created)
///     .with_window(created, created + Duration::minutes(15));
///
/// assert_eq!(item.deadline(), created + Duration::minutes(15));
/// assert_eq!(item.status(created + Duration::hours(1)), TaskStatus::Overdue);
/// assert_eq!(item.completed().status(created + Duration::hours(1)), TaskStatus::Completed);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct WorkItem {
    /// Caller-assigned identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    /// Short title.
    pub title: String,
    /// Free-form description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Fallback timestamp used when a window bound is missing.
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub time: DateTime<Utc>,
    /// Start of the working window.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_time: Option<DateTime<Utc>>,
    /// End of the working window.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_time: Option<DateTime<Utc>>,
    /// Completion flag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub done: bool,
    /// Whether the user wants a reminder when the deadline arrives.
    #[cfg_attr(feature = "serde", serde(default = "default_reminder"))]
    pub reminder: bool,
    /// Display priority.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: Priority,
}

#[cfg(feature = "serde")]
const fn default_reminder() -> bool {
    true
}

impl WorkItem {
    /// Creates a pending task with no window and reminders enabled.
    #[must_use]
    pub fn new(title: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: String::new(),
            time,
            start_time: None,
            end_time: None,
            done: false,
            reminder: true,
            priority: Priority::default(),
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets both window bounds.
    #[must_use]
    pub const fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Sets only the end of the window.
    #[must_use]
    pub const fn with_end_time(mut self, end: DateTime<Utc>) -> Self {
        self.end_time = Some(end);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Enables or disables the reminder.
    #[must_use]
    pub const fn with_reminder(mut self, reminder: bool) -> Self {
        self.reminder = reminder;
        self
    }

    /// Marks the task as done.
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.done = true;
        self
    }

    /// Returns `end_time`, or `time` if the task has no end.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> DateTime<Utc> {
        self.end_time.unwrap_or(self.time)
    }

    /// Returns `start_time`, or `time` if the task has no start.
    #[inline]
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start_time.unwrap_or(self.time)
    }

    /// Returns `true` if the task is not done and its deadline is before `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.done && self.deadline() < now
    }

    /// Returns the time left until the deadline; negative once it has passed.
    #[must_use]
    pub fn time_until_end(&self, now: DateTime<Utc>) -> Duration {
        self.deadline() - now
    }

    /// Returns the display status at `now`.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> TaskStatus {
        if self.done {
            TaskStatus::Completed
        } else if self.deadline() < now {
            TaskStatus::Overdue
        } else {
            TaskStatus::Pending
        }
    }
}

impl Deadline for WorkItem {
    #[inline]
    fn deadline(&self) -> DateTime<Utc> {
        Self::deadline(self)
    }
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
    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[rstest]
    fn test_deadline_prefers_end_time(base: DateTime<Utc>) {
        let item = WorkItem::new("t", base).with_end_time(base + Duration::hours(4));
        assert_eq!(item.deadline(), base + Duration::hours(4));
    }

    #[rstest]
    fn test_deadline_falls_back_to_time(base: DateTime<Utc>) {
        let item = WorkItem::new("t", base);
        assert_eq!(item.deadline(), base);
        assert_eq!(item.start(), base);
    }

    #[rstest]
    fn test_reference_deadline_delegates(base: DateTime<Utc>) {
        let item = WorkItem::new("t", base).with_end_time(base + Duration::minutes(5));
        let borrowed = &item;
        assert_eq!(Deadline::deadline(&borrowed), item.deadline());
    }

    #[rstest]
    #[case(false, -1, TaskStatus::Overdue)]
    #[case(false, 1, TaskStatus::Pending)]
    #[case(true, -1, TaskStatus::Completed)]
    #[case(true, 1, TaskStatus::Completed)]
    fn test_status(
        base: DateTime<Utc>,
        #[case] done: bool,
        #[case] offset_hours: i64,
        #[case] expected: TaskStatus,
    ) {
        let mut item = WorkItem::new("t", base).with_end_time(base + Duration::hours(offset_hours));
        item.done = done;
        assert_eq!(item.status(base), expected);
        assert_eq!(item.is_overdue(base), expected == TaskStatus::Overdue);
    }

    #[rstest]
    fn test_deadline_equal_to_now_is_not_overdue(base: DateTime<Utc>) {
        let item = WorkItem::new("t", base);
        assert!(!item.is_overdue(base));
        assert_eq!(item.status(base), TaskStatus::Pending);
    }

    #[rstest]
    fn test_time_until_end_goes_negative(base: DateTime<Utc>) {
        let item = WorkItem::new("t", base).with_end_time(base + Duration::minutes(30));
        assert_eq!(item.time_until_end(base), Duration::minutes(30));
        assert_eq!(item.time_until_end(base + Duration::hours(1)), Duration::minutes(-30));
    }
}
