#![cfg(feature = "board")]
//! Integration tests for the question board index.
//!
//! These run with a test subscriber installed so the index's tracing
//! events are exercised; set `RUST_LOG=auxindex=debug` to see them.

use auxindex::board::{
    BoardConfig, BoardQuery, Question, QuestionIndex, Record, SortOrder, count_labels,
    group_by_label, rank_by_score,
};
use auxindex::collections::SAMPLE_CAPACITY;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap() + Duration::days(offset)
}

#[fixture]
fn questions() -> Vec<Question> {
    vec![
        Question::new("1", "How to use iterators", "Chaining map and filter", day(0))
            .with_tags(["rust", "iterators"])
            .with_votes(12, 2),
        Question::new("2", "Hooks and state", "useState keeps resetting", day(1))
            .with_tags(["react", "javascript"])
            .with_votes(4, 0),
        Question::new("3", "Iterator invalidation", "Mutating a vector while looping", day(2))
            .with_tags(["rust", "c++"])
            .with_votes(8, 1),
        Question::new("4", "Closures capturing state", "Move semantics", day(3))
            .with_tags(["rust", "javascript"])
            .with_votes(0, 3),
    ]
}

fn ids(results: &[&Question]) -> Vec<String> {
    results.iter().map(|question| question.id.clone()).collect()
}

#[rstest]
fn test_build_and_query(questions: Vec<Question>) {
    init_tracing();
    let index = QuestionIndex::build(questions, BoardConfig::default());

    let by_score = index.query(&BoardQuery::default());
    let scores: Vec<i64> = by_score.iter().map(|question| question.score()).collect();
    assert_eq!(scores, vec![10, 7, 4, -3]);

    let javascript = BoardQuery::default()
        .with_tags(["javascript"])
        .sorted_by(SortOrder::Newest);
    assert_eq!(ids(&index.query(&javascript)), ["4", "2"]);

    let searched = BoardQuery::default()
        .with_search("STATE")
        .sorted_by(SortOrder::Oldest);
    assert_eq!(ids(&index.query(&searched)), ["2", "4"]);
}

#[rstest]
fn test_suggestions_come_from_titles_content_and_tags(questions: Vec<Question>) {
    init_tracing();
    let index = QuestionIndex::build(questions, BoardConfig::default());

    assert_eq!(index.suggestions("ite"), ["iterators", "iterators", "Iterator"]);
    assert_eq!(index.suggestions("jav"), ["javascript", "javascript"]);
    assert_eq!(index.suggestions("c+"), ["c++"]);
    assert!(index.suggestions("i").is_empty());
}

#[rstest]
fn test_helpers_agree_with_index(questions: Vec<Question>) {
    let groups = group_by_label(&questions, 4);
    let counts = count_labels(&questions, 4);
    let index = QuestionIndex::build(questions.clone(), BoardConfig::default().with_bucket_count(4));

    for tag in ["rust", "javascript", "react", "c++", "iterators"] {
        let grouped: Vec<String> = groups
            .get(tag)
            .map(|members| members.iter().map(|question| question.id.clone()).collect())
            .unwrap_or_default();
        assert_eq!(grouped, ids(&index.tagged(tag)));
        assert_eq!(counts.get(tag), index.tag_counts().get(tag));
    }

    let ranked: Vec<String> = rank_by_score(&questions)
        .iter()
        .map(|question| question.id.clone())
        .collect();
    assert_eq!(ranked, ids(&index.query(&BoardQuery::default())));
}

#[rstest]
fn test_busy_prefix_under_reports(questions: Vec<Question>) {
    let mut index = QuestionIndex::build(
        questions,
        BoardConfig::default().with_suggestion_limit(SAMPLE_CAPACITY + 5),
    );
    for number in 0..SAMPLE_CAPACITY {
        index.push(Question::new(format!("extra-{number}"), format!("zeta{number}"), "", day(9)));
    }
    index.push(Question::new("late", "zetalate", "", day(10)));

    let suggestions = index.suggestions("ze");
    assert_eq!(suggestions.len(), SAMPLE_CAPACITY);
    assert!(!suggestions.iter().any(|word| word == "zetalate"));
    assert_eq!(index.suggestions("zetal"), ["zetalate"]);
}
