//! Integration tests for reuse-align.
//!
//! These tests verify end-to-end alignment from raw text to score and snippet.

use reuse_align::align::{align, align_tokens, align_with_params, AlignError, Side};
use reuse_align::models::{AlignmentParams, HighlightStyle};
use reuse_align::render::locate_highlights;
use reuse_align::tokenize::tokenize;

/// Build a text of `count` distinct filler words with a given prefix.
fn filler(prefix: &str, count: usize) -> String {
    (0..count)
        .map(|i| format!("{}{}", prefix, i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_identical_text_scores_one() {
    let result = align("the quick brown fox", "the quick brown fox").unwrap();

    assert_eq!(result.score, 1.0);
    assert_eq!(
        locate_highlights(&result.snippet),
        vec![
            ("the".to_string(), true),
            ("quick".to_string(), true),
            ("brown".to_string(), true),
            ("fox".to_string(), true),
        ]
    );
}

#[test]
fn test_case_insensitive_two_token_match() {
    let result = align("Hello world", "hello WORLD").unwrap();
    assert_eq!(result.score, 1.0);
    assert_eq!(result.snippet, "[[Hello]] [[world]]");
}

#[test]
fn test_trailing_period_matches_but_is_displayed() {
    let result = align("the lazy dog.", "the lazy dog").unwrap();
    assert_eq!(result.score, 1.0);
    assert!(result.snippet.contains("[[dog.]]"));
}

#[test]
fn test_no_overlap_degenerates_to_single_token() {
    let result = align("a b c d e", "x y z").unwrap();

    assert_eq!(result.score, 0.0);
    assert!(result.summary.degenerate);

    let highlights = locate_highlights(&result.snippet);
    assert_eq!(highlights, vec![("a".to_string(), false)]);
    assert!(highlights.iter().all(|(_, matched)| !matched));
    assert_eq!(result.snippet, "{{a}} b c d e");
}

#[test]
fn test_whitespace_runs_collapse() {
    let single = align("one two three", "two three").unwrap();
    let doubled = align("one  two\t\tthree", "two   three").unwrap();

    assert_eq!(tokenize("one  two\t\tthree"), tokenize("one two three"));
    assert_eq!(single, doubled);
}

#[test]
fn test_deterministic() {
    let a = "it was the best of times it was the worst of times";
    let b = "it was the worst of times indeed";

    let first = align(a, b).unwrap();
    for _ in 0..5 {
        let again = align(a, b).unwrap();
        assert_eq!(again.score, first.score);
        assert_eq!(again.snippet, first.snippet);
    }
}

#[test]
fn test_score_depends_on_second_length() {
    let long = "alpha beta gamma delta epsilon";
    let short = "beta gamma";

    let forward = align(long, short).unwrap();
    let backward = align(short, long).unwrap();

    assert_eq!(forward.score, 1.0);
    assert!(backward.score < forward.score);
    assert_eq!(backward.score, 4.0 / 10.0);
}

#[test]
fn test_embedded_passage_with_context() {
    let passage = "to be or not to be that is the question";
    let text_a = format!("{} {} {}", filler("pre", 15), passage, filler("post", 15));

    let result = align(&text_a, passage).unwrap();
    assert_eq!(result.score, 1.0);

    let highlights = locate_highlights(&result.snippet);
    let expected: Vec<(String, bool)> = passage
        .split_whitespace()
        .map(|t| (t.to_string(), true))
        .collect();
    assert_eq!(highlights, expected);

    // Ten tokens of context each side, with truncation markers
    assert!(result.snippet.starts_with("... pre5 pre6"));
    assert!(result.snippet.ends_with("post8 post9 ..."));
}

#[test]
fn test_score_in_unit_range_for_partial_overlap() {
    let a = "the cat sat on the mat and looked at the dog";
    let b = "a cat sat quietly on a mat";

    let result = align(a, b).unwrap();
    assert!(result.score > 0.0);
    assert!(result.score <= 1.0);
    assert!(locate_highlights(&result.snippet).iter().any(|(_, matched)| *matched));
}

#[test]
fn test_boundary_regression_both_shapes() {
    let params = AlignmentParams::default();
    let short = tokenize("shared words");
    let long = tokenize("shared words plus several more trailing tokens here");

    // Both orientations must fill and trace back without panicking
    let wide = align_tokens(&short, &long, &params).unwrap();
    let tall = align_tokens(&long, &short, &params).unwrap();

    assert_eq!(wide.best_score, 4);
    assert_eq!(tall.best_score, 4);
    assert_eq!(tall.score, 1.0);
}

#[test]
fn test_empty_input_is_an_error() {
    assert_eq!(
        align("", "something").unwrap_err(),
        AlignError::EmptyInput { side: Side::First }
    );
    assert_eq!(
        align("something", " \n ").unwrap_err(),
        AlignError::EmptyInput { side: Side::Second }
    );
}

#[test]
fn test_html_style_end_to_end() {
    let params = AlignmentParams {
        style: HighlightStyle::Html,
        ..Default::default()
    };
    let result = align_with_params("Tom & Jerry ran", "tom & jerry", &params).unwrap();

    assert_eq!(result.score, 1.0);
    assert!(result.snippet.contains("<span class=\"match\">Tom</span>"));
    assert!(result.snippet.contains("<span class=\"match\">&amp;</span>"));
    assert!(result.snippet.ends_with(" ran"));
}

#[test]
fn test_floor_at_zero_matches_textbook_traceback() {
    let params = AlignmentParams {
        floor_at_zero: true,
        ..Default::default()
    };
    let result = align_with_params("x y the quick fox", "the quick fox", &params).unwrap();

    assert_eq!(result.score, 1.0);
    assert_eq!(result.snippet, "x y [[the]] [[quick]] [[fox]]");
}
