//! Question board index built from the collections.
//!
//! A Q&A client keeps a list of questions and wants to filter it by tag,
//! search it, rank it by score and autocomplete the search box. This module
//! composes [`AssociativeMap`](crate::collections::AssociativeMap),
//! [`PriorityContainer`](crate::collections::PriorityContainer) and
//! [`PrefixIndex`](crate::collections::PrefixIndex) to do that.
//!
//! - [`Record`]: The two properties the index needs from a record
//! - [`Question`]: The board's record type
//! - [`group_by_label`], [`count_labels`], [`rank_by_score`]: Helpers over
//!   any [`Record`] slice
//! - [`QuestionIndex`]: An owned index over a question list
//! - [`BoardQuery`], [`SortOrder`]: What to filter and how to order
//! - [`BoardConfig`]: Index tuning
//!
//! The index is an ordinary value. Building, querying and extending it
//! happen through explicit calls; nothing is shared or global.
//!
//! # Examples
//!
//! ```rust
//! use auxindex::board::{BoardConfig, BoardQuery, Question, QuestionIndex, SortOrder};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let questions = vec![
//!     Question::new("q1", "Lifetimes in structs", "How do lifetimes work?", now)
//!         .with_tags(["rust"])
//!         .with_votes(3, 0),
//!     Question::new("q2", "Flexbox centering", "Center a div", now)
//!         .with_tags(["css"])
//!         .with_votes(10, 1),
//!     Question::new("q3", "Borrow checker", "Why is this borrowed?", now)
//!         .with_tags(["rust"])
//!         .with_votes(7, 0),
//! ];
//!
//! let index = QuestionIndex::build(questions, BoardConfig::default());
//!
//! let query = BoardQuery::default().with_tags(["rust"]).sorted_by(SortOrder::Score);
//! let ids: Vec<&str> = index.query(&query).iter().map(|question| question.id.as_str()).collect();
//! assert_eq!(ids, vec!["q3", "q1"]);
//!
//! assert_eq!(index.suggestions("lif"), ["Lifetimes", "lifetimes"]);
//! assert_eq!(index.tag_counts().get("rust"), Some(&2));
//! ```

mod config;
mod index;
mod question;
mod record;

pub use config::BoardConfig;
pub use index::BoardQuery;
pub use index::QuestionIndex;
pub use index::SortOrder;
pub use question::Question;
pub use record::Record;
pub use record::count_labels;
pub use record::group_by_label;
pub use record::rank_by_score;
