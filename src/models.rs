//! Data structures for word-level alignment and snippet rendering.

use serde::{Deserialize, Serialize};

/// How aligned tokens are marked up in the rendered snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    /// `[[tok]]` for matches, `{{tok}}` for mismatches, `...` for truncation
    #[default]
    Plain,
    /// `<span class="match">` / `<span class="mismatch">`, tokens escaped
    Html,
    /// Terminal colors: green for matches, red for mismatches
    Ansi,
}

/// Alignment parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentParams {
    pub match_score: i32,
    pub mismatch_penalty: i32,
    pub deletion_penalty: i32,  // Gap in the second sequence (move up)
    pub insertion_penalty: i32, // Gap in the first sequence (move left)
    pub context_tokens: usize,  // Tokens of context on each side of the snippet
    pub floor_at_zero: bool,    // Clamp cells at 0 (textbook Smith-Waterman)
    pub style: HighlightStyle,
}

impl Default for AlignmentParams {
    fn default() -> Self {
        Self {
            match_score: 2,
            mismatch_penalty: -1,
            deletion_penalty: -1,
            insertion_penalty: -1,
            context_tokens: 10,
            floor_at_zero: false,
            style: HighlightStyle::Plain,
        }
    }
}

/// One step of the traceback path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentEntry {
    pub position: usize, // Index into the first token sequence
    pub matched: bool,
    pub token: String,   // Original (unnormalized) token text
}

/// Alignment of two token sequences before rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAlignment {
    pub score: f64,
    pub best_score: i32,
    pub best_cell: (usize, usize), // 1-based matrix coordinates
    pub entries: Vec<AlignmentEntry>,
}

impl TokenAlignment {
    /// True when no positive local alignment was found
    pub fn is_degenerate(&self) -> bool {
        self.best_score == 0
    }

    /// Number of distinct positions rendered as matches
    pub fn matched_count(&self) -> usize {
        self.distinct_entries().filter(|e| e.matched).count()
    }

    /// First and last aligned position in the first sequence
    pub fn span(&self) -> Option<(usize, usize)> {
        let first = self.entries.first()?.position;
        let last = self.entries.last()?.position;
        Some((first, last))
    }

    /// Entries with repeated positions removed, keeping the first of each run
    pub fn distinct_entries(&self) -> impl Iterator<Item = &AlignmentEntry> {
        let mut previous: Option<usize> = None;
        self.entries.iter().filter(move |entry| {
            let keep = previous != Some(entry.position);
            previous = Some(entry.position);
            keep
        })
    }
}

/// Caller-facing result of aligning two texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub score: f64,
    pub snippet: String,
    pub alignment: TokenAlignment,
    pub summary: AlignmentSummary,
}

/// Sizes and counts reported alongside a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSummary {
    pub tokens_a: usize,
    pub tokens_b: usize,
    pub aligned_positions: usize,
    pub matched_positions: usize,
    pub degenerate: bool,
}

impl AlignmentSummary {
    pub fn new(tokens_a: usize, tokens_b: usize, alignment: &TokenAlignment) -> Self {
        Self {
            tokens_a,
            tokens_b,
            aligned_positions: alignment.distinct_entries().count(),
            matched_positions: alignment.matched_count(),
            degenerate: alignment.is_degenerate(),
        }
    }
}
