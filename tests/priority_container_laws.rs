#![cfg(feature = "collections")]
//! Property-based tests for PriorityContainer.
//!
//! Extraction must follow the comparator and must neither lose nor invent
//! items.

use auxindex::collections::PriorityContainer;
use proptest::prelude::*;
use std::cmp::Ordering;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..100)
}

fn arbitrary_scored() -> impl Strategy<Value = Vec<(u8, i16)>> {
    prop::collection::vec((any::<u8>(), -50_i16..50), 0..60)
}

// =============================================================================
// Ordering Law: extraction order is non-increasing under the comparator
// =============================================================================

proptest! {
    #[test]
    fn prop_extraction_is_non_increasing(values in arbitrary_values()) {
        let mut heap = PriorityContainer::max_first();
        heap.extend(values);

        let drained = heap.into_sorted_vec();
        for pair in drained.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }
}

proptest! {
    #[test]
    fn prop_custom_comparator_is_respected(items in arbitrary_scored()) {
        let compare = |left: &(u8, i16), right: &(u8, i16)| left.1.cmp(&right.1);
        let mut heap = PriorityContainer::new(compare);
        heap.extend(items);

        let drained = heap.into_sorted_vec();
        for pair in drained.windows(2) {
            prop_assert_ne!(compare(&pair[0], &pair[1]), Ordering::Less);
        }
    }
}

// =============================================================================
// Conservation Law: extracted multiset equals inserted multiset
// =============================================================================

proptest! {
    #[test]
    fn prop_extraction_preserves_multiset(values in arbitrary_values()) {
        let mut heap = PriorityContainer::min_first();
        heap.extend(values.iter().copied());
        prop_assert_eq!(heap.len(), values.len());

        let mut drained = heap.into_sorted_vec();
        let mut expected = values;
        drained.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }
}

// =============================================================================
// Peek Law: peek agrees with the next extract
// =============================================================================

proptest! {
    #[test]
    fn prop_peek_matches_extract(values in arbitrary_values()) {
        let mut heap = PriorityContainer::max_first();
        heap.extend(values);

        while let Some(&peeked) = heap.peek() {
            prop_assert_eq!(heap.extract(), Some(peeked));
        }
        prop_assert_eq!(heap.extract(), None);
    }
}

// =============================================================================
// Interleaving Law: mixed inserts and extracts behave like a sorted bag
// =============================================================================

proptest! {
    #[test]
    fn prop_interleaved_operations_match_model(
        operations in prop::collection::vec(prop::option::of(any::<i16>()), 0..120)
    ) {
        let mut heap = PriorityContainer::max_first();
        let mut model: Vec<i16> = Vec::new();

        for operation in operations {
            match operation {
                Some(value) => {
                    heap.insert(value);
                    model.push(value);
                }
                None => {
                    model.sort_unstable();
                    prop_assert_eq!(heap.extract(), model.pop());
                }
            }
            prop_assert_eq!(heap.len(), model.len());
        }
    }
}
