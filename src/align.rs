//! Word-level local alignment of two token sequences.
//!
//! Cells are NOT clamped at zero unless `floor_at_zero` is set, so negative
//! running sums propagate through the matrix. The best cell is still tracked
//! against an implicit floor of 0, which keeps the reported score in [0, 1]
//! for realistic inputs.

use crate::models::{AlignmentEntry, AlignmentParams, AlignmentResult, AlignmentSummary, TokenAlignment};
use crate::render::render_snippet;
use crate::tokenize::{comparison_key, tokenize};
use std::fmt;
use thiserror::Error;

/// Which of the two inputs an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("{side} text contains no tokens")]
    EmptyInput { side: Side },
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

/// Highest-scoring cell seen during the fill, in 1-based matrix coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestCell {
    pub score: i32,
    pub i: usize,
    pub j: usize,
}

/// Dynamic-programming matrix of size (m+1) × (n+1).
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    cells: Vec<i32>,
    rows: usize,
    cols: usize,
    best: BestCell,
}

impl ScoreMatrix {
    /// Fill the matrix for first sequence `x` (rows) and second sequence `y` (columns).
    ///
    /// Both sequences must be non-empty; [`align_tokens`] checks this before
    /// calling.
    pub fn fill<S: AsRef<str>>(x: &[S], y: &[S], params: &AlignmentParams) -> Self {
        let keys_x: Vec<String> = x.iter().map(|t| comparison_key(t.as_ref())).collect();
        let keys_y: Vec<String> = y.iter().map(|t| comparison_key(t.as_ref())).collect();
        Self::fill_keys(&keys_x, &keys_y, params)
    }

    fn fill_keys(keys_x: &[String], keys_y: &[String], params: &AlignmentParams) -> Self {
        let m = keys_x.len();
        let n = keys_y.len();
        let rows = m + 1;
        let cols = n + 1;

        // H[i][j] = cells[i * cols + j]
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize(rows * cols, 0i32);

        // Column 0 spans 0..=m, row 0 spans 0..=n
        for i in 0..rows {
            cells[i * cols] = 0;
        }
        for j in 0..cols {
            cells[j] = 0;
        }

        // Implicit floor of 0; the first scanned cell stands in until beaten
        let mut best = BestCell {
            score: 0,
            i: 1,
            j: 1,
        };

        for i in 1..rows {
            let key_x = &keys_x[i - 1];
            let row_offset = i * cols;
            let prev_row_offset = (i - 1) * cols;

            for j in 1..cols {
                let substitution = if *key_x == keys_y[j - 1] {
                    params.match_score
                } else {
                    params.mismatch_penalty
                };

                let diagonal = cells[prev_row_offset + (j - 1)] + substitution;
                let up = cells[prev_row_offset + j] + params.deletion_penalty;
                let left = cells[row_offset + (j - 1)] + params.insertion_penalty;

                let mut score = diagonal.max(up).max(left);
                if params.floor_at_zero {
                    score = score.max(0);
                }
                cells[row_offset + j] = score;

                // Strict comparison: the first cell in row-major order wins ties
                if score > best.score {
                    best = BestCell { score, i, j };
                }
            }
        }

        ScoreMatrix {
            cells,
            rows,
            cols,
            best,
        }
    }

    /// Cell value at row `i`, column `j`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Number of rows (m + 1).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (n + 1).
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn best(&self) -> BestCell {
        self.best
    }
}

/// Direction of one traceback step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Left,
    Diagonal,
}

/// Pick the next traceback move.
///
/// Preference is up, then left, then diagonal, all with strict comparisons,
/// so every tie falls through to the diagonal.
#[inline]
pub fn step_direction(up: i32, left: i32, diagonal: i32) -> Step {
    if up > left {
        if up > diagonal {
            Step::Up
        } else {
            Step::Diagonal
        }
    } else if left > diagonal {
        Step::Left
    } else {
        Step::Diagonal
    }
}

/// Walk back from the best cell and collect aligned positions of `x`.
///
/// The walk starts at the best cell's coordinates shifted to 0-based token
/// indices and uses those indices directly as matrix coordinates. Entries
/// come back in increasing position order. The cell the walk ends on is
/// always recorded, so the result is never empty.
///
/// Panics if `x` or `y` is empty; `matrix` must come from the same pair.
pub fn traceback<S: AsRef<str>>(matrix: &ScoreMatrix, x: &[S], y: &[S]) -> Vec<AlignmentEntry> {
    let keys_x: Vec<String> = x.iter().map(|t| comparison_key(t.as_ref())).collect();
    let keys_y: Vec<String> = y.iter().map(|t| comparison_key(t.as_ref())).collect();
    traceback_keys(matrix, x, &keys_x, &keys_y)
}

fn traceback_keys<S: AsRef<str>>(
    matrix: &ScoreMatrix,
    x: &[S],
    keys_x: &[String],
    keys_y: &[String],
) -> Vec<AlignmentEntry> {
    let best = matrix.best();
    let mut i = best.i.saturating_sub(1);
    let mut j = best.j.saturating_sub(1);

    let make_entry = |i: usize, j: usize| AlignmentEntry {
        position: i,
        matched: keys_x[i] == keys_y[j],
        token: x[i].as_ref().to_string(),
    };

    let mut entries = Vec::new();

    while matrix.get(i, j) != 0 && i != 0 && j != 0 {
        // Tokens that normalize to nothing (a bare ".") are not recorded
        if !keys_y[j].is_empty() {
            entries.push(make_entry(i, j));
        }

        let up = matrix.get(i - 1, j);
        let left = matrix.get(i, j - 1);
        let diagonal = matrix.get(i - 1, j - 1);

        match step_direction(up, left, diagonal) {
            Step::Up => i -= 1,
            Step::Left => j -= 1,
            Step::Diagonal => {
                i -= 1;
                j -= 1;
            }
        }
    }

    entries.push(make_entry(i, j));

    // Built backwards, reverse it
    entries.reverse();
    entries
}

/// Check parameters that would make the score undefined.
pub fn validate_params(params: &AlignmentParams) -> Result<(), AlignError> {
    if params.match_score <= 0 {
        return Err(AlignError::InvalidParams(format!(
            "match_score must be positive, got {}",
            params.match_score
        )));
    }
    Ok(())
}

/// Align two token sequences without rendering.
///
/// The score is `best / (n × match_score)` where `n` is the length of `y`,
/// so swapping the inputs generally changes it.
pub fn align_tokens<S: AsRef<str>>(
    x: &[S],
    y: &[S],
    params: &AlignmentParams,
) -> Result<TokenAlignment, AlignError> {
    validate_params(params)?;

    if x.is_empty() {
        return Err(AlignError::EmptyInput { side: Side::First });
    }
    if y.is_empty() {
        return Err(AlignError::EmptyInput { side: Side::Second });
    }

    let keys_x: Vec<String> = x.iter().map(|t| comparison_key(t.as_ref())).collect();
    let keys_y: Vec<String> = y.iter().map(|t| comparison_key(t.as_ref())).collect();

    let matrix = ScoreMatrix::fill_keys(&keys_x, &keys_y, params);
    let best = matrix.best();

    log::debug!(
        "filled {}x{} matrix, best cell ({}, {}) = {}",
        matrix.rows(),
        matrix.cols(),
        best.i,
        best.j,
        best.score
    );

    let score = best.score as f64 / (y.len() as f64 * params.match_score as f64);
    let entries = traceback_keys(&matrix, x, &keys_x, &keys_y);

    if best.score == 0 {
        log::warn!("no positive local alignment found, reporting a single-token span");
    } else {
        log::debug!("traceback produced {} entries", entries.len());
    }

    Ok(TokenAlignment {
        score,
        best_score: best.score,
        best_cell: (best.i, best.j),
        entries,
    })
}

/// Align two texts with default parameters.
pub fn align(text1: &str, text2: &str) -> Result<AlignmentResult, AlignError> {
    align_with_params(text1, text2, &AlignmentParams::default())
}

/// Align two texts and render the highlighted snippet of the first.
pub fn align_with_params(
    text1: &str,
    text2: &str,
    params: &AlignmentParams,
) -> Result<AlignmentResult, AlignError> {
    let x = tokenize(text1);
    let y = tokenize(text2);

    let alignment = align_tokens(&x, &y, params)?;
    let snippet = render_snippet(&x, &alignment.entries, params);
    let summary = AlignmentSummary::new(x.len(), y.len(), &alignment);

    Ok(AlignmentResult {
        score: alignment.score,
        snippet,
        alignment,
        summary,
    })
}
