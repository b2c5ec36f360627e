use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use readability::{analyze_file, format_report, OutputFormat, ReadabilityConfig, ScoreSelection};

/// Environment variable that overrides the log filter
const LOG_ENV: &str = "READABILITY_LOG";

/// Readability - Plain-text readability scoring
#[derive(Parser)]
#[command(name = "readability")]
#[command(about = "Scores a text with ARI, Flesch–Kincaid, SMOG and Coleman–Liau")]
#[command(version)]
struct Cli {
  /// Text file to analyze
  #[arg(value_name = "FILE")]
  file: PathBuf,

  /// Score to print (defaults to the configured selection, then all)
  #[arg(short, long, ignore_case = true)]
  score: Option<ScoreSelection>,

  /// Output format (defaults to the configured format, then pretty)
  #[arg(short, long)]
  format: Option<OutputFormat>,

  /// Configuration file path
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Enable debug logging on stderr
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  if !console::Term::stdout().is_term() {
    colored::control::set_override(false);
  }

  if let Err(e) = run(cli) {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("readability=debug")
    } else {
      EnvFilter::new("readability=warn")
    }
  });

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

fn run(cli: Cli) -> Result<()> {
  let config = match &cli.config {
    Some(path) => ReadabilityConfig::load_from_file(path)?,
    None => ReadabilityConfig::load()?,
  };
  let (selection, format) = config.resolve(cli.score, cli.format);

  let report = analyze_file(&cli.file)
    .with_context(|| format!("Could not analyze {}", cli.file.display()))?;

  if report.is_degenerate() {
    tracing::warn!(
      words = report.counts.words,
      sentences = report.counts.sentences,
      "text has no words or no sentences; scores are not finite"
    );
  }

  print!("{}", format_report(&report, selection, format));
  Ok(())
}
