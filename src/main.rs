//! Reuse Align command line
//!
//! Word-level local alignment of two texts with a highlighted excerpt of the
//! aligned region.

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use reuse_align::align::{align_tokens, align_with_params, validate_params};
use reuse_align::models::{AlignmentParams, HighlightStyle};
use reuse_align::output::{
    format_result, print_params, print_result, read_params_file, write_csv, write_csv_file,
    write_json, write_json_file,
};

#[derive(Parser)]
#[command(name = "reuse-align")]
#[command(about = "Word-level local alignment for text reuse detection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output format for alignment results
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
    /// Single CSV row with header
    Csv,
}

/// Highlight style (CLI version, mirrors models::HighlightStyle)
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliHighlightStyle {
    /// [[match]] {{mismatch}} markers
    Plain,
    /// HTML span elements
    Html,
    /// Terminal colors
    Ansi,
}

impl From<CliHighlightStyle> for HighlightStyle {
    fn from(style: CliHighlightStyle) -> Self {
        match style {
            CliHighlightStyle::Plain => HighlightStyle::Plain,
            CliHighlightStyle::Html => HighlightStyle::Html,
            CliHighlightStyle::Ansi => HighlightStyle::Ansi,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Align two texts and render the highlighted excerpt of the first
    ///
    /// Parameters default to AlignmentParams::default(), optionally replaced by
    /// a --params JSON file. Explicit flags override both.
    Align {
        /// First text (the one rendered in the snippet)
        #[arg(long, conflicts_with = "file_a", required_unless_present = "file_a")]
        text_a: Option<String>,

        /// Read the first text from a file
        #[arg(long)]
        file_a: Option<PathBuf>,

        /// Second text (its length is the score denominator)
        #[arg(long, conflicts_with = "file_b", required_unless_present = "file_b")]
        text_b: Option<String>,

        /// Read the second text from a file
        #[arg(long)]
        file_b: Option<PathBuf>,

        /// Write the result to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, or csv
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// JSON file with alignment parameters
        #[arg(long)]
        params: Option<PathBuf>,

        // === Parameters that inherit from AlignmentParams ===

        /// Highlight style [default: plain]
        #[arg(long, value_enum)]
        style: Option<CliHighlightStyle>,

        /// Score for a token match [default: 2]
        #[arg(long)]
        match_score: Option<i32>,

        /// Penalty for a token mismatch [default: -1]
        #[arg(long, allow_hyphen_values = true)]
        mismatch_penalty: Option<i32>,

        /// Penalty for a gap in the second text [default: -1]
        #[arg(long, allow_hyphen_values = true)]
        deletion_penalty: Option<i32>,

        /// Penalty for a gap in the first text [default: -1]
        #[arg(long, allow_hyphen_values = true)]
        insertion_penalty: Option<i32>,

        /// Context tokens before/after the aligned span [default: 10]
        #[arg(long)]
        context_tokens: Option<usize>,

        /// Clamp matrix cells at zero (textbook Smith-Waterman)
        #[arg(long)]
        floor_at_zero: bool,

        /// Suppress status output
        #[arg(long)]
        quiet: bool,
    },

    /// Benchmark alignment performance
    Benchmark {
        /// Number of alignment iterations
        #[arg(long, default_value = "200")]
        iterations: usize,

        /// Tokens per text
        #[arg(long, default_value = "275")]
        size: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Align {
            text_a,
            file_a,
            text_b,
            file_b,
            output,
            format,
            params,
            style,
            match_score,
            mismatch_penalty,
            deletion_penalty,
            insertion_penalty,
            context_tokens,
            floor_at_zero,
            quiet,
        } => {
            let text_a = read_text(text_a, file_a.as_deref())?;
            let text_b = read_text(text_b, file_b.as_deref())?;

            // Start from the params file if given, otherwise library defaults
            let base = match &params {
                Some(path) => read_params_file(path)?,
                None => AlignmentParams::default(),
            };

            // Overlay user-specified values
            let params = AlignmentParams {
                match_score: match_score.unwrap_or(base.match_score),
                mismatch_penalty: mismatch_penalty.unwrap_or(base.mismatch_penalty),
                deletion_penalty: deletion_penalty.unwrap_or(base.deletion_penalty),
                insertion_penalty: insertion_penalty.unwrap_or(base.insertion_penalty),
                context_tokens: context_tokens.unwrap_or(base.context_tokens),
                floor_at_zero: floor_at_zero || base.floor_at_zero,
                style: style.map(HighlightStyle::from).unwrap_or(base.style),
            };
            validate_params(&params)?;

            if !quiet {
                print_params(&params);
            }

            let result = align_with_params(&text_a, &text_b, &params)?;

            match (&output, format) {
                (Some(path), OutputFormat::Json) => write_json_file(&result, path)?,
                (Some(path), OutputFormat::Csv) => write_csv_file(&result, path)?,
                (Some(path), OutputFormat::Text) => {
                    std::fs::write(path, format_result(&result))?
                }
                (None, OutputFormat::Json) => {
                    write_json(&result, &mut std::io::stdout())?;
                    println!();
                }
                (None, OutputFormat::Csv) => write_csv(&result, &mut std::io::stdout())?,
                (None, OutputFormat::Text) => print_result(&result),
            }

            if !quiet {
                if result.summary.degenerate {
                    eprintln!("Warning: texts share no local alignment");
                }
                if let Some(path) = &output {
                    eprintln!("\nOutput: {}", path.display());
                }
            }
        }

        Commands::Benchmark { iterations, size } => {
            run_benchmark(iterations, size)?;
        }
    }

    Ok(())
}

/// Take text from the inline argument or read it from a file.
fn read_text(inline: Option<String>, path: Option<&Path>) -> std::io::Result<String> {
    match (inline, path) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path),
        (None, None) => Ok(String::new()),
    }
}

/// Run alignment benchmark to measure performance.
fn run_benchmark(iterations: usize, size: usize) -> Result<(), Box<dyn std::error::Error>> {
    use std::time::Instant;

    println!("=== Alignment Benchmark ===");
    println!("Iterations: {}", iterations);
    println!("Tokens per text: {}", size);

    let params = AlignmentParams::default();

    // Create test sequences
    let words: Vec<String> = (0..size).map(|i| format!("w{}", i)).collect();
    let partial: Vec<String> = (0..size)
        .map(|i| if i % 10 < 7 { format!("w{}", i) } else { format!("x{}", i) })
        .collect();
    let no_match: Vec<String> = (0..size).map(|i| format!("z{}", i)).collect();

    let cases = [
        ("Identical texts", &words),
        ("70% match texts", &partial),
        ("No match texts", &no_match),
    ];

    for (label, other) in cases {
        println!("\n{}:", label);

        let bar = ProgressBar::new(iterations as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")?
                .progress_chars("=>-"),
        );

        let start = Instant::now();
        for _ in 0..iterations {
            std::hint::black_box(align_tokens(&words, other, &params)?);
            bar.inc(1);
        }
        let elapsed = start.elapsed();
        bar.finish_and_clear();

        let per_alignment = elapsed.as_secs_f64() / iterations.max(1) as f64;
        println!("  Total time: {:.3}s", elapsed.as_secs_f64());
        println!("  Per alignment: {:.3}ms", per_alignment * 1000.0);
        if per_alignment > 0.0 {
            println!("  Alignments/sec: {:.0}", 1.0 / per_alignment);
        }
    }

    Ok(())
}
