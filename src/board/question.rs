//! The question record.

use chrono::{DateTime, Utc};

use super::record::Record;

/// A question on the board.
///
/// # Examples
///
/// ```rust
/// use auxindex::board::{Question, Record};
/// use chrono::Utc;
///
/// let question = Question::new("42", "Title", "Body", Utc::now())
///     .with_tags(["rust", "traits"])
///     .with_votes(5, 2);
///
/// assert_eq!(question.score(), 3);
/// assert_eq!(question.labels(), ["rust", "traits"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Question {
    /// Identifier assigned by the backing store.
    pub id: String,
    /// Title line.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Tags, already normalized by the caller.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Number of up votes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub upvotes: u32,
    /// Number of down votes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub downvotes: u32,
    /// Net score used for ranking.
    #[cfg_attr(feature = "serde", serde(default))]
    pub score: i64,
    /// Creation time, used by the newest / oldest orderings.
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Creates an untagged question with no votes.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            upvotes: 0,
            downvotes: 0,
            score: 0,
            created_at,
        }
    }

    /// Replaces the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the vote counts and derives the score from them.
    #[must_use]
    pub fn with_votes(mut self, upvotes: u32, downvotes: u32) -> Self {
        self.upvotes = upvotes;
        self.downvotes = downvotes;
        self.score = i64::from(upvotes) - i64::from(downvotes);
        self
    }

    /// Words of the title and content, split on single spaces.
    pub(super) fn words(&self) -> impl Iterator<Item = &str> {
        self.title.split(' ').chain(self.content.split(' '))
    }

    /// Returns `true` if the title, content or any tag contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub(super) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

impl Record for Question {
    fn score(&self) -> i64 {
        self.score
    }

    fn labels(&self) -> &[String] {
        &self.tags
    }
}

// =============================================================================
// Tests
// =============================================================================
