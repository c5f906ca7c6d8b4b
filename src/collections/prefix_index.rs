//! Character trie with a bounded sample list per prefix.
//!
//! This module provides [`PrefixIndex`], an autocomplete index. Words are
//! indexed by their lowercased characters. Every node along a word's path
//! also remembers up to [`SAMPLE_CAPACITY`] of the words that passed through
//! it, so a prefix lookup answers from that node alone without walking the
//! subtree.
//!
//! # Prefix Hit Cache
//!
//! The per-node sample list is first-come-first-served and never evicts:
//! once a node holds [`SAMPLE_CAPACITY`] samples, later words that share the
//! prefix are not recorded there. Suggestions are therefore what happened to
//! be captured during insertion, not a full enumeration of completions, and
//! can under-report for busy prefixes.
//!
//! Samples keep the casing the caller inserted; only the path is lowercased.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity                     |
//! |---------------|--------------------------------|
//! | `insert`      | O(m) for m characters          |
//! | `contains`    | O(m)                           |
//! | `suggestions` | O(m), returns a borrowed slice |
//!
//! # Examples
//!
//! ```rust
//! use auxindex::collections::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("Tokio");
//! index.insert("tower");
//! index.insert("to");
//!
//! assert_eq!(index.suggestions("TO"), ["Tokio", "tower", "to"]);
//! assert_eq!(index.suggestions("tow"), ["tower"]);
//! assert!(index.suggestions("x").is_empty());
//!
//! assert!(index.contains("to"));
//! assert!(!index.contains("tow"));
//! ```

use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// Maximum number of sample words kept at each node.
pub const SAMPLE_CAPACITY: usize = 10;

const ROOT: usize = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    children: SmallVec<[(char, usize); 4]>,
    end_of_word: bool,
    samples: ArrayVec<String, SAMPLE_CAPACITY>,
}

impl Node {
    fn child(&self, character: char) -> Option<usize> {
        self.children
            .iter()
            .find(|(edge, _)| *edge == character)
            .map(|(_, index)| *index)
    }
}

/// A character trie that caches a bounded sample list at each node.
///
/// Nodes live in a single `Vec` and refer to their children by index.
///
/// # Examples
///
/// ```rust
/// use auxindex::collections::{PrefixIndex, SAMPLE_CAPACITY};
///
/// let mut index = PrefixIndex::new();
/// for number in 0..=SAMPLE_CAPACITY {
///     index.insert(&format!("a{number}"));
/// }
///
/// // The eleventh word was indexed but not sampled at "a".
/// assert_eq!(index.suggestions("a").len(), SAMPLE_CAPACITY);
/// assert!(index.contains("a10"));
/// ```
#[derive(Clone, Debug)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    word_count: usize,
}

impl PrefixIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }

    /// Returns the number of distinct complete words indexed.
    ///
    /// Words that differ only in casing count once.
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the number of nodes, including the root.
    #[inline]
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no word has been inserted.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Indexes `word`.
    ///
    /// Walks (creating as needed) one node per lowercased character and
    /// appends `word`, with its original casing, to the sample list of every
    /// node on the path that still has room. The final node is marked as the
    /// end of a word. The root never receives samples.
    pub fn insert(&mut self, word: &str) {
        let mut current = ROOT;
        let mut dropped = 0_usize;
        for character in word.to_lowercase().chars() {
            current = self.nodes[current].child(character).unwrap_or_else(|| {
                let next = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[current].children.push((character, next));
                next
            });
            let samples = &mut self.nodes[current].samples;
            if samples.is_full() {
                dropped += 1;
            } else {
                samples.push(word.to_owned());
            }
        }
        if dropped > 0 {
            tracing::trace!(word, dropped, "sample lists full along prefix path");
        }
        let terminal = &mut self.nodes[current];
        if !terminal.end_of_word {
            terminal.end_of_word = true;
            self.word_count += 1;
        }
    }

    /// Returns `true` if `word` was inserted as a complete word.
    ///
    /// The comparison is case-insensitive. A word that only exists as the
    /// prefix of a longer inserted word does not count.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word)
            .is_some_and(|node| self.nodes[node].end_of_word)
    }

    /// Returns `true` if some inserted word starts with `prefix`,
    /// case-insensitively.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Returns the sample words cached for `prefix`.
    ///
    /// The prefix is lowercased before walking. If the path does not exist
    /// the result is empty. Otherwise it is the node's sample list: at most
    /// [`SAMPLE_CAPACITY`] words in insertion order, duplicates included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxindex::collections::PrefixIndex;
    ///
    /// let mut index = PrefixIndex::new();
    /// index.insert("serde");
    /// index.insert("serde");
    /// assert_eq!(index.suggestions("Ser"), ["serde", "serde"]);
    /// assert!(index.suggestions("").is_empty());
    /// ```
    #[must_use]
    pub fn suggestions(&self, prefix: &str) -> &[String] {
        self.find(prefix)
            .map_or(&[] as &[String], |node| self.nodes[node].samples.as_slice())
    }

    fn find(&self, text: &str) -> Option<usize> {
        text.to_lowercase()
            .chars()
            .try_fold(ROOT, |node, character| self.nodes[node].child(character))
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_index_is_empty() {
        let index = PrefixIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.word_count(), 0);
        assert_eq!(index.node_count(), 1);
    }

    #[rstest]
    fn test_insert_creates_one_node_per_character() {
        let mut index = PrefixIndex::new();
        index.insert("abc");
        index.insert("abd");
        assert_eq!(index.node_count(), 5);
        assert_eq!(index.word_count(), 2);
    }

    #[rstest]
    #[case("Rust", "rust", true)]
    #[case("rust", "RUST", true)]
    #[case("rust", "rus", false)]
    #[case("rust", "rusty", false)]
    #[case("rust", "", false)]
    fn test_contains(#[case] inserted: &str, #[case] query: &str, #[case] expected: bool) {
        let mut index = PrefixIndex::new();
        index.insert(inserted);
        assert_eq!(index.contains(query), expected);
    }

    #[rstest]
    fn test_samples_keep_original_casing() {
        let mut index = PrefixIndex::new();
        index.insert("JavaScript");
        assert_eq!(index.suggestions("java"), ["JavaScript"]);
        assert_eq!(index.suggestions("JAVASCRIPT"), ["JavaScript"]);
    }

    #[rstest]
    fn test_root_receives_no_samples() {
        let mut index = PrefixIndex::new();
        index.insert("a");
        assert!(index.suggestions("").is_empty());
        assert_eq!(index.suggestions("a"), ["a"]);
    }

    #[rstest]
    fn test_empty_word_marks_root() {
        let mut index = PrefixIndex::new();
        index.insert("");
        assert!(index.contains(""));
        assert!(!index.is_empty());
        assert_eq!(index.word_count(), 1);
    }

    #[rstest]
    fn test_cap_drops_later_words_without_eviction() {
        let mut index = PrefixIndex::new();
        let words: Vec<String> = (0..15).map(|number| format!("p{number:02}")).collect();
        index.extend(&words);

        assert_eq!(index.suggestions("p"), &words[..SAMPLE_CAPACITY]);
        // Deeper nodes still have room for the later words.
        assert_eq!(index.suggestions("p1"), ["p10", "p11", "p12", "p13", "p14"]);
        assert!(index.contains("p14"));
    }

    #[rstest]
    fn test_repeated_word_counts_once_but_samples_twice() {
        let mut index = PrefixIndex::new();
        index.insert("go");
        index.insert("Go");
        assert_eq!(index.word_count(), 1);
        assert_eq!(index.suggestions("g"), ["go", "Go"]);
    }

    #[rstest]
    fn test_missing_path_yields_empty_slice() {
        let index: PrefixIndex = ["alpha", "beta"].into_iter().collect();
        assert!(index.suggestions("gamma").is_empty());
        assert!(index.suggestions("alphabet").is_empty());
        assert!(!index.starts_with("c"));
        assert!(index.starts_with("BE"));
    }
}
