//! vader CLI
//!
//! Usage:
//!   vader --lexicon vader_lexicon.txt --text "your text here"   # Single evaluation
//!   vader --lexicon vader_lexicon.txt                           # One sentence per stdin line
//!   vader --lexicon vader_lexicon.txt --text "text" --json      # JSON output

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vader::core::{Lexicon, SentiText, SentimentAnalyzer};
use vader::types::{SentimentLabel, SentimentRecord, ValenceConfig};
use vader::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "vader",
    version = VERSION,
    about = "Rule-based sentiment scoring - compound polarity plus pos/neg/neu shares",
    long_about = "Scores short texts with a valence lexicon and heuristics for\n\
                  negation, boosters, ALL-CAPS emphasis, 'but' and punctuation.\n\n\
                  Without --text, each stdin line is scored as one sentence."
)]
struct Args {
    /// Lexicon file (token<TAB>valence per line)
    #[arg(short, long)]
    lexicon: PathBuf,

    /// JSON file overriding the default calibration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text to evaluate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show per-token valences
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let lexicon = Lexicon::from_path(&args.lexicon)
        .with_context(|| format!("failed loading lexicon: {}", args.lexicon.display()))?;
    let config = match &args.config {
        Some(path) => ValenceConfig::from_path(path)
            .with_context(|| format!("failed loading config: {}", path.display()))?,
        None => ValenceConfig::default(),
    };
    let analyzer = SentimentAnalyzer::new(lexicon).with_config(config);

    if let Some(ref text) = args.text {
        print_result(&analyzer, text, &args)?;
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed reading STDIN")?;
        if line.trim().is_empty() {
            continue;
        }
        print_result(&analyzer, &line, &args)?;
    }
    Ok(())
}

/// Score one sentence and print it in the selected format
fn print_result(analyzer: &SentimentAnalyzer, text: &str, args: &Args) -> Result<()> {
    let sentence = SentiText::new(text);
    let record = analyzer.score(&sentence);

    if args.json {
        println!("{}", serde_json::to_string(&record)?);
        return Ok(());
    }

    if args.no_color {
        println!("{}", record.to_parseable_string());
    } else {
        println!("{}", colorize(&record));
    }

    if args.verbose {
        print_token_valences(analyzer, &sentence);
    }
    Ok(())
}

fn colorize(record: &SentimentRecord) -> String {
    let line = format!("{} {}", record.label(), record.to_parseable_string());
    match record.label() {
        SentimentLabel::Positive => line.green().to_string(),
        SentimentLabel::Negative => line.red().to_string(),
        SentimentLabel::Neutral => line.dimmed().to_string(),
    }
}

/// Print per-token breakdown
fn print_token_valences(analyzer: &SentimentAnalyzer, sentence: &SentiText) {
    let valences = analyzer.token_valences(sentence);
    println!("  caps differential: {}", sentence.cap_differential());
    for (token, valence) in sentence.tokens().iter().zip(valences) {
        if valence != 0.0 {
            println!("  {:<16} {:+.3}", token.text, valence);
        }
    }
}
