//! Errors reported when a task is rejected.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Why a task failed [`validate`](super::validate).
///
/// # Examples
///
/// ```rust
/// use auxindex::schedule::ScheduleError;
///
/// let error = ScheduleError::MissingTitle;
/// assert_eq!(error.to_string(), "task title is required");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The title is empty or whitespace.
    #[error("task title is required")]
    MissingTitle,

    /// The task has no start time.
    #[error("task start time is required")]
    MissingStartTime,

    /// The task has no end time.
    #[error("task end time is required")]
    MissingEndTime,

    /// The start time is not before the end time.
    #[error("task start time {start} must be before end time {end}")]
    InvalidWindow {
        /// The rejected start time.
        start: DateTime<Utc>,
        /// The rejected end time.
        end: DateTime<Utc>,
    },
}
