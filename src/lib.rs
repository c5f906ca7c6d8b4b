//! # auxindex
//!
//! In-memory auxiliary indexes for small record-oriented applications.
//!
//! ## Overview
//!
//! A client that holds a list of records (questions on a Q&A board, tasks
//! in a personal scheduler) usually wants to sort, group, autocomplete and
//! pick the next actionable item without re-scanning or re-querying the
//! backing list on every interaction. This crate provides the small set of
//! structures that do that:
//!
//! - **Collections**: [`PriorityContainer`](collections::PriorityContainer),
//!   a comparator-ordered binary heap; [`AssociativeMap`](collections::AssociativeMap),
//!   a hash map with linear chaining; and [`PrefixIndex`](collections::PrefixIndex),
//!   a character trie that caches a bounded sample list per prefix.
//! - **Schedule**: [`next_task`](schedule::next_task), the greedy earliest-deadline
//!   selector, and [`DeadlineQueue`](schedule::DeadlineQueue), an independent
//!   min-heap keyed on deadlines, plus task validation and lookup helpers.
//! - **Board**: [`QuestionIndex`](board::QuestionIndex), which composes the
//!   collections into tag grouping, score ranking and autocomplete.
//!
//! All structures are synchronous and single-threaded. None of them signal
//! errors for expected absence; they return `None` or an empty slice.
//!
//! ## Feature Flags
//!
//! - `collections`: heap, bucket map and prefix index
//! - `schedule`: work items and deadline scheduling
//! - `board`: question board index (implies `collections`)
//! - `serde`: `Serialize` / `Deserialize` for records and configuration
//! - `fxhash`: use `rustc-hash` as the default map hasher
//! - `ahash`: use `ahash` as the default map hasher
//! - `full`: `collections`, `schedule`, `board` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use auxindex::prelude::*;
//!
//! let mut heap = PriorityContainer::max_first();
//! heap.extend([3, 9, 4]);
//! assert_eq!(heap.extract(), Some(9));
//!
//! let mut index = PrefixIndex::new();
//! index.insert("Rust");
//! assert_eq!(index.suggestions("ru"), ["Rust"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use auxindex::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    #[cfg(feature = "schedule")]
    pub use crate::schedule::*;

    #[cfg(feature = "board")]
    pub use crate::board::*;
}

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "board")]
pub mod board;
