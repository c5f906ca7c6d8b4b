//! Tuning knobs for [`QuestionIndex`](super::QuestionIndex).

use crate::collections::DEFAULT_BUCKET_COUNT;

/// Configuration for building and querying a question index.
///
/// With the `serde` feature every field is optional when deserializing;
/// missing fields take their default.
///
/// # Examples
///
/// ```rust
/// use auxindex::board::BoardConfig;
///
/// let config = BoardConfig::default().with_suggestion_limit(8);
/// assert_eq!(config.suggestion_limit, 8);
/// assert_eq!(config.min_query_chars, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BoardConfig {
    /// Bucket count of the tag map.
    pub bucket_count: usize,
    /// Title and content words shorter than this are not indexed for
    /// autocomplete. Tags are always indexed.
    pub min_word_chars: usize,
    /// Queries shorter than this get no suggestions.
    pub min_query_chars: usize,
    /// Maximum number of suggestions returned.
    pub suggestion_limit: usize,
}

impl BoardConfig {
    /// Sets the tag map bucket count.
    #[must_use]
    pub const fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Sets the minimum indexed word length, in characters.
    #[must_use]
    pub const fn with_min_word_chars(mut self, min_word_chars: usize) -> Self {
        self.min_word_chars = min_word_chars;
        self
    }

    /// Sets the minimum query length for suggestions, in characters.
    #[must_use]
    pub const fn with_min_query_chars(mut self, min_query_chars: usize) -> Self {
        self.min_query_chars = min_query_chars;
        self
    }

    /// Sets the maximum number of suggestions.
    #[must_use]
    pub const fn with_suggestion_limit(mut self, suggestion_limit: usize) -> Self {
        self.suggestion_limit = suggestion_limit;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            min_word_chars: 3,
            min_query_chars: 2,
            suggestion_limit: 5,
        }
    }
}
