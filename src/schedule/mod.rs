//! Deadline-driven helpers for a personal task list.
//!
//! The task list itself belongs to the caller; every function here takes the
//! items as an argument and returns a result, keeping no ambient state.
//!
//! - [`WorkItem`]: A task with an optional time window and a completion flag
//! - [`next_task`]: Greedy earliest-deadline selector (first wins on ties)
//! - [`DeadlineQueue`]: Min-heap keyed on deadlines for repeated extraction
//! - [`validate`] / [`is_duplicate`]: Checks run before accepting a new task
//! - [`find_by_title`], [`search`], [`TaskStats`], [`pending_reminders`]:
//!   Lookups over the list
//! - [`select_non_overlapping`]: Greedy activity selection
//!
//! # Two Earliest-Deadline Algorithms
//!
//! [`next_task`] and [`DeadlineQueue`] answer the same question in different
//! ways and resolve ties differently. [`next_task`] is a stable left-to-right
//! reduction: among items sharing the earliest deadline, the first one in
//! the slice wins. [`DeadlineQueue`] resolves ties by heap shape. They are
//! independent code paths.
//!
//! # Examples
//!
//! ```rust
//! use auxindex::schedule::{DeadlineQueue, WorkItem, next_task};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
//! let items = vec![
//!     WorkItem::new("write report", start).with_end_time(start + Duration::hours(2)),
//!     WorkItem::new("call bank", start).with_end_time(start + Duration::hours(1)),
//!     WorkItem::new("gym", start).with_end_time(start + Duration::hours(3)),
//! ];
//!
//! assert_eq!(next_task(&items).map(|item| item.title.as_str()), Some("call bank"));
//!
//! let mut queue: DeadlineQueue<&WorkItem> = items.iter().collect();
//! let order: Vec<&str> = std::iter::from_fn(|| queue.extract_min())
//!     .map(|item| item.title.as_str())
//!     .collect();
//! assert_eq!(order, vec!["call bank", "write report", "gym"]);
//! ```

mod deadline_queue;
mod error;
mod greedy;
mod lookup;
mod validation;
mod work_item;

pub use deadline_queue::DeadlineQueue;
pub use error::ScheduleError;
pub use greedy::next_task;
pub use greedy::select_non_overlapping;
pub use lookup::TaskStats;
pub use lookup::find_by_title;
pub use lookup::pending_reminders;
pub use lookup::search;
pub use lookup::sort_by_title;
pub use validation::is_duplicate;
pub use validation::validate;
pub use work_item::Deadline;
pub use work_item::Priority;
pub use work_item::TaskStatus;
pub use work_item::WorkItem;
