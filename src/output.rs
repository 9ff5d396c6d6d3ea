//! Output formatting for alignment results (JSON, CSV, text report) and
//! parameter file loading.

use crate::align::AlignError;
use crate::models::{AlignmentParams, AlignmentResult};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Alignment error: {0}")]
    Align(#[from] AlignError),
}

/// Load alignment parameters from a JSON file.
///
/// Missing fields fall back to `AlignmentParams::default()`.
pub fn read_params_file(path: &Path) -> Result<AlignmentParams, OutputError> {
    let contents = std::fs::read_to_string(path)?;
    let params: AlignmentParams = serde_json::from_str(&contents)?;
    crate::align::validate_params(&params)?;
    Ok(params)
}

/// Write alignment result as JSON.
pub fn write_json<W: Write>(result: &AlignmentResult, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(result)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write alignment result as JSON to a file.
pub fn write_json_file(result: &AlignmentResult, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(result, &mut file)
}

/// Write alignment result as a single CSV row with header.
pub fn write_csv<W: Write>(result: &AlignmentResult, writer: &mut W) -> Result<(), OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    writer.write_record([
        "score",
        "best_score",
        "best_i",
        "best_j",
        "tokens_a",
        "tokens_b",
        "aligned_positions",
        "matched_positions",
        "degenerate",
        "snippet",
    ])?;

    writer.write_record([
        result.score.to_string(),
        result.alignment.best_score.to_string(),
        result.alignment.best_cell.0.to_string(),
        result.alignment.best_cell.1.to_string(),
        result.summary.tokens_a.to_string(),
        result.summary.tokens_b.to_string(),
        result.summary.aligned_positions.to_string(),
        result.summary.matched_positions.to_string(),
        result.summary.degenerate.to_string(),
        result.snippet.clone(),
    ])?;

    writer.flush()?;
    Ok(())
}

/// Write alignment result as CSV to a file.
pub fn write_csv_file(result: &AlignmentResult, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_csv(result, &mut file)
}

/// Format an alignment result as a human-readable report.
pub fn format_result(result: &AlignmentResult) -> String {
    let span = match result.alignment.span() {
        Some((start, end)) => format!("{}→{}", start, end),
        None => "-".to_string(),
    };

    format!(
        "Score: {:.1}% (best cell {} at {}:{})\n\
         \x20 Tokens: {} ↔ {}  Aligned: {}  Matched: {}  Span: [{}]{}\n\
         Snippet: {}",
        result.score * 100.0,
        result.alignment.best_score,
        result.alignment.best_cell.0,
        result.alignment.best_cell.1,
        result.summary.tokens_a,
        result.summary.tokens_b,
        result.summary.aligned_positions,
        result.summary.matched_positions,
        span,
        if result.summary.degenerate {
            "  (no local alignment)"
        } else {
            ""
        },
        result.snippet,
    )
}

/// Print an alignment result to stdout.
pub fn print_result(result: &AlignmentResult) {
    println!("{}", format_result(result));
}

/// Print the parameters used for an alignment to stderr.
pub fn print_params(params: &AlignmentParams) {
    eprintln!("Parameters:");
    eprintln!("  Match score: {}", params.match_score);
    eprintln!("  Mismatch penalty: {}", params.mismatch_penalty);
    eprintln!("  Deletion penalty: {}", params.deletion_penalty);
    eprintln!("  Insertion penalty: {}", params.insertion_penalty);
    eprintln!("  Context tokens: {}", params.context_tokens);
    eprintln!("  Floor at zero: {}", params.floor_at_zero);
}
