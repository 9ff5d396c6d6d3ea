//! Reuse Align Library
//!
//! Word-level local alignment between two texts for near-duplicate and
//! text reuse detection. Tokens are compared case-insensitively with a
//! single trailing period ignored; the aligned region of the first text is
//! rendered as a highlighted snippet with surrounding context.
//!
//! # Example
//!
//! ```
//! use reuse_align::prelude::*;
//!
//! let result = align("the quick brown fox", "the quick brown fox").unwrap();
//! assert_eq!(result.score, 1.0);
//! assert_eq!(result.snippet, "[[the]] [[quick]] [[brown]] [[fox]]");
//! ```
//!
//! # Custom Parameters
//!
//! ```
//! use reuse_align::prelude::*;
//!
//! let params = AlignmentParams {
//!     context_tokens: 1,
//!     style: HighlightStyle::Html,
//!     ..Default::default()
//! };
//!
//! let result = align_with_params("one two three four five", "three", &params).unwrap();
//! assert_eq!(
//!     result.snippet,
//!     "&hellip; two <span class=\"match\">three</span> four &hellip;"
//! );
//! ```

pub mod align;
pub mod models;
pub mod output;
pub mod render;
pub mod tokenize;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::align::{
        align, align_tokens, align_with_params, step_direction, traceback, validate_params,
        AlignError, BestCell, ScoreMatrix, Side, Step,
    };
    pub use crate::models::{
        AlignmentEntry, AlignmentParams, AlignmentResult, AlignmentSummary, HighlightStyle,
        TokenAlignment,
    };
    pub use crate::output::{
        format_result, print_params, print_result, read_params_file, write_csv, write_csv_file,
        write_json, write_json_file, OutputError,
    };
    pub use crate::render::{escape_html, highlight, locate_highlights, render_snippet};
    pub use crate::tokenize::{comparison_key, normalize_token, tokenize, tokens_match};
}

// Re-export commonly used types at the crate root
pub use align::{align, align_with_params, AlignError};
pub use models::{AlignmentParams, AlignmentResult, HighlightStyle};
