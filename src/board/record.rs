//! The record abstraction and the grouping and ranking helpers built on it.

use crate::collections::{AssociativeMap, PriorityContainer};

/// An item with a numeric ordering key and a set of string labels.
///
/// The helpers in this module only read records; they never take ownership
/// of the caller's list.
pub trait Record {
    /// Ordering key; higher ranks first.
    fn score(&self) -> i64;

    /// Labels (tags) attached to the record.
    fn labels(&self) -> &[String];
}

impl<R: Record + ?Sized> Record for &R {
    fn score(&self) -> i64 {
        (**self).score()
    }

    fn labels(&self) -> &[String] {
        (**self).labels()
    }
}

/// Groups records by label.
///
/// Each label maps to the records carrying it, in slice order. A record
/// that lists the same label twice appears twice under it.
///
/// # Examples
///
/// ```rust
/// use auxindex::board::{Question, group_by_label};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let questions = vec![
///     Question::new("a", "A", "", now).with_tags(["rust", "async"]),
///     Question::new("b", "B", "", now).with_tags(["rust"]),
/// ];
/// let groups = group_by_label(&questions, 16);
/// assert_eq!(groups.get("rust").map(Vec::len), Some(2));
/// assert_eq!(groups.get("async").map(Vec::len), Some(1));
/// ```
#[must_use]
pub fn group_by_label<R: Record>(records: &[R], bucket_count: usize) -> AssociativeMap<String, Vec<&R>> {
    group_with(records, bucket_count, |_, record| record)
}

/// Maps each label to the positions in `records` that carry it.
pub(super) fn group_positions<R: Record>(
    records: &[R],
    bucket_count: usize,
) -> AssociativeMap<String, Vec<usize>> {
    group_with(records, bucket_count, |position, _| position)
}

fn group_with<'a, R, T, P>(
    records: &'a [R],
    bucket_count: usize,
    mut project: P,
) -> AssociativeMap<String, Vec<T>>
where
    R: Record,
    P: FnMut(usize, &'a R) -> T,
{
    let mut groups: AssociativeMap<String, Vec<T>> = AssociativeMap::with_buckets(bucket_count);
    for (position, record) in records.iter().enumerate() {
        for label in record.labels() {
            groups
                .entry_or_insert_with(label.clone(), Vec::new)
                .push(project(position, record));
        }
    }
    groups
}

/// Counts how many times each label occurs across `records`.
#[must_use]
pub fn count_labels<R: Record>(records: &[R], bucket_count: usize) -> AssociativeMap<String, usize> {
    let mut counts: AssociativeMap<String, usize> = AssociativeMap::with_buckets(bucket_count);
    for label in records.iter().flat_map(Record::labels) {
        *counts.entry_or_insert_with(label.clone(), || 0) += 1;
    }
    counts
}

/// Orders records by descending score.
///
/// Ranking goes through a [`PriorityContainer`], so records with equal
/// scores come out in an unspecified order.
///
/// # Examples
///
/// ```rust
/// use auxindex::board::{Question, rank_by_score};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let questions = vec![
///     Question::new("low", "", "", now).with_votes(1, 0),
///     Question::new("high", "", "", now).with_votes(9, 0),
/// ];
/// let ranked: Vec<&str> = rank_by_score(&questions).iter().map(|question| question.id.as_str()).collect();
/// assert_eq!(ranked, vec!["high", "low"]);
/// ```
#[must_use]
pub fn rank_by_score<'a, R, I>(records: I) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut heap = PriorityContainer::new(|left: &&R, right: &&R| left.score().cmp(&right.score()));
    heap.extend(records);
    heap.into_sorted_vec()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Item {
        score: i64,
        labels: Vec<String>,
    }

    impl Record for Item {
        fn score(&self) -> i64 {
            self.score
        }

        fn labels(&self) -> &[String] {
            &self.labels
        }
    }

    fn item(score: i64, labels: &[&str]) -> Item {
        Item {
            score,
            labels: labels.iter().map(|label| (*label).to_string()).collect(),
        }
    }

    #[rstest]
    fn test_group_positions_keeps_slice_order() {
        let items = vec![item(0, &["x"]), item(0, &["y"]), item(0, &["x", "y"])];
        let groups = group_positions(&items, 4);
        assert_eq!(groups.get("x"), Some(&vec![0, 2]));
        assert_eq!(groups.get("y"), Some(&vec![1, 2]));
        assert_eq!(groups.len(), 2);
    }

    #[rstest]
    fn test_repeated_label_is_grouped_twice() {
        let items = vec![item(0, &["dup", "dup"])];
        assert_eq!(group_positions(&items, 4).get("dup"), Some(&vec![0, 0]));
        assert_eq!(count_labels(&items, 4).get("dup"), Some(&2));
    }

    #[rstest]
    fn test_count_labels() {
        let items = vec![item(0, &["a", "b"]), item(0, &["a"]), item(0, &[])];
        let counts = count_labels(&items, 8);
        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.get("c"), None);
    }

    #[rstest]
    fn test_rank_by_score_is_descending() {
        let items = vec![item(2, &[]), item(-5, &[]), item(11, &[]), item(0, &[])];
        let scores: Vec<i64> = rank_by_score(&items).iter().map(|ranked| ranked.score()).collect();
        assert_eq!(scores, vec![11, 2, 0, -5]);
    }

    #[rstest]
    fn test_rank_by_score_on_empty_input() {
        let items: Vec<Item> = Vec::new();
        assert!(rank_by_score(&items).is_empty());
    }
}
