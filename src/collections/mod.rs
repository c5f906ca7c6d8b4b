//! Mutable in-memory index structures.
//!
//! This module provides the three structures a client keeps next to its
//! record list so it does not have to re-scan that list on every
//! interaction:
//!
//! - [`PriorityContainer`]: Binary heap ordered by a caller-supplied comparator
//! - [`AssociativeMap`]: Hash map with a fixed bucket array and linear chaining
//! - [`PrefixIndex`]: Character trie with a bounded sample list per node
//!
//! # Ownership
//!
//! Each structure owns its backing storage exclusively. Records are stored
//! by value, so callers that want to keep their own copy store clones or
//! references (`PriorityContainer<&Question, _>` is fine).
//!
//! # Examples
//!
//! ## `PriorityContainer`
//!
//! ```rust
//! use auxindex::collections::PriorityContainer;
//!
//! let mut heap = PriorityContainer::new(|left: &(&str, i64), right: &(&str, i64)| {
//!     left.1.cmp(&right.1)
//! });
//! heap.insert(("low", 1));
//! heap.insert(("high", 10));
//! assert_eq!(heap.extract(), Some(("high", 10)));
//! ```
//!
//! ## `AssociativeMap`
//!
//! ```rust
//! use auxindex::collections::AssociativeMap;
//!
//! let mut counts: AssociativeMap<String, usize> = AssociativeMap::new();
//! *counts.entry_or_insert_with("rust".to_string(), || 0) += 1;
//! *counts.entry_or_insert_with("rust".to_string(), || 0) += 1;
//! assert_eq!(counts.get("rust"), Some(&2));
//! ```
//!
//! ## `PrefixIndex`
//!
//! ```rust
//! use auxindex::collections::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("Borrow");
//! index.insert("box");
//! assert_eq!(index.suggestions("BO"), ["Borrow", "box"]);
//! assert!(index.contains("BORROW"));
//! ```

mod bucket_map;
mod heap;
mod prefix_index;

pub use bucket_map::AssociativeMap;
pub use bucket_map::AssociativeMapIterator;
pub use bucket_map::DEFAULT_BUCKET_COUNT;
pub use bucket_map::DefaultBuildHasher;
pub use bucket_map::Keys;
pub use bucket_map::Values;
pub use heap::Comparator;
pub use heap::PriorityContainer;
pub use prefix_index::PrefixIndex;
pub use prefix_index::SAMPLE_CAPACITY;

// =============================================================================
// Thread Affinity
// =============================================================================

static_assertions::assert_impl_all!(PriorityContainer<i32>: Send, Sync);
static_assertions::assert_impl_all!(AssociativeMap<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(PrefixIndex: Send, Sync);
static_assertions::assert_not_impl_any!(AssociativeMap<std::rc::Rc<str>, i32>: Send, Sync);
