//! The owned question index.

use std::cmp::Reverse;

use crate::collections::{AssociativeMap, PrefixIndex};

use super::config::BoardConfig;
use super::question::Question;
use super::record::{count_labels, group_positions, rank_by_score};

/// How query results are ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SortOrder {
    /// Highest score first; ties in unspecified order.
    #[default]
    Score,
    /// Most recently created first; ties keep list order.
    Newest,
    /// Least recently created first; ties keep list order.
    Oldest,
}

/// A filter-and-sort request against a [`QuestionIndex`].
///
/// The default query matches everything and sorts by score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct BoardQuery {
    /// Keep questions carrying at least one of these tags. Empty keeps all.
    pub tags: Vec<String>,
    /// Keep questions whose title, content or tags contain this text,
    /// ignoring case. Empty keeps all.
    pub search: String,
    /// Result ordering.
    pub sort: SortOrder,
}

impl BoardQuery {
    /// Replaces the tag filter.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Replaces the ordering.
    #[must_use]
    pub const fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// An index over a list of questions.
///
/// Holds the questions, a tag map from tag to question positions, and a
/// [`PrefixIndex`] over title words, content words and tags.
#[derive(Clone, Debug)]
pub struct QuestionIndex {
    questions: Vec<Question>,
    by_tag: AssociativeMap<String, Vec<usize>>,
    words: PrefixIndex,
    config: BoardConfig,
}

impl QuestionIndex {
    /// Builds an index over `questions`.
    #[must_use]
    pub fn build(questions: Vec<Question>, config: BoardConfig) -> Self {
        let by_tag = group_positions(&questions, config.bucket_count);
        let mut words = PrefixIndex::new();
        for question in &questions {
            index_words(&mut words, question, &config);
        }
        tracing::debug!(
            questions = questions.len(),
            tags = by_tag.len(),
            words = words.word_count(),
            "built question index"
        );
        Self {
            questions,
            by_tag,
            words,
            config,
        }
    }

    /// Adds one question to the index.
    pub fn push(&mut self, question: Question) {
        let position = self.questions.len();
        for tag in &question.tags {
            self.by_tag
                .entry_or_insert_with(tag.clone(), Vec::new)
                .push(position);
        }
        index_words(&mut self.words, &question, &self.config);
        self.questions.push(question);
    }

    /// Returns the indexed questions in insertion order.
    #[inline]
    #[must_use]
    pub const fn questions(&self) -> &[Question] {
        self.questions.as_slice()
    }

    /// Returns the number of indexed questions.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if no questions are indexed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the configuration the index was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the questions carrying `tag`, in insertion order.
    #[must_use]
    pub fn tagged(&self, tag: &str) -> Vec<&Question> {
        self.by_tag.get(tag).map_or_else(Vec::new, |positions| {
            positions
                .iter()
                .map(|&position| &self.questions[position])
                .collect()
        })
    }

    /// Filters and orders the questions.
    ///
    /// The tag filter keeps questions carrying any of the requested tags.
    /// The search then keeps questions mentioning the text. Survivors are
    /// ordered by `query.sort`.
    pub fn query(&self, query: &BoardQuery) -> Vec<&Question> {
        let mut selected = vec![query.tags.is_empty(); self.questions.len()];
        for tag in &query.tags {
            for &position in self.by_tag.get(tag.as_str()).into_iter().flatten() {
                selected[position] = true;
            }
        }

        let needle = query.search.to_lowercase();
        let filtered = self
            .questions
            .iter()
            .zip(selected)
            .filter(|(_, keep)| *keep)
            .map(|(question, _)| question)
            .filter(|question| needle.is_empty() || question.mentions(&needle));

        let results = match query.sort {
            SortOrder::Score => rank_by_score(filtered),
            SortOrder::Newest => {
                let mut results: Vec<&Question> = filtered.collect();
                results.sort_by_key(|question| Reverse(question.created_at));
                results
            }
            SortOrder::Oldest => {
                let mut results: Vec<&Question> = filtered.collect();
                results.sort_by_key(|question| question.created_at);
                results
            }
        };
        tracing::debug!(
            tags = query.tags.len(),
            search = %query.search,
            sort = ?query.sort,
            results = results.len(),
            "queried question index"
        );
        results
    }

    /// Returns autocomplete suggestions for `query`.
    ///
    /// Queries shorter than [`BoardConfig::min_query_chars`] get nothing.
    /// Otherwise the prefix index samples are returned, cut to
    /// [`BoardConfig::suggestion_limit`].
    #[must_use]
    pub fn suggestions(&self, query: &str) -> &[String] {
        if query.chars().count() < self.config.min_query_chars {
            return &[];
        }
        let samples = self.words.suggestions(query);
        &samples[..samples.len().min(self.config.suggestion_limit)]
    }

    /// Counts questions per tag.
    #[must_use]
    pub fn tag_counts(&self) -> AssociativeMap<String, usize> {
        count_labels(&self.questions, self.config.bucket_count)
    }
}

fn index_words(words: &mut PrefixIndex, question: &Question, config: &BoardConfig) {
    for word in question.words() {
        if word.chars().count() >= config.min_word_chars {
            words.insert(word);
        }
    }
    for tag in &question.tags {
        words.insert(tag);
    }
}

// =============================================================================
// Tests
// =============================================================================
