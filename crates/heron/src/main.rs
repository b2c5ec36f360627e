use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use heron::{parse_side_tokens, parse_sides, triangle_area};

/// Heron - triangle area from three sides
#[derive(Parser)]
#[command(name = "heron")]
#[command(about = "Computes a triangle's area from its three side lengths")]
#[command(version)]
struct Cli {
  /// Side lengths; read from stdin when omitted
  #[arg(value_name = "SIDE", allow_negative_numbers = true)]
  sides: Vec<String>,
}

fn main() {
  let cli = Cli::parse();

  let filter = EnvFilter::try_from_env("HERON_LOG").unwrap_or_else(|_| EnvFilter::new("heron=warn"));
  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

  if let Err(e) = run(cli) {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let [a, b, c] = if cli.sides.is_empty() {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).context("Failed to read side lengths from stdin")?;
    parse_sides(&input)?
  } else {
    parse_side_tokens(&cli.sides)?
  };

  tracing::debug!(a, b, c, "computing area");

  // Debug formatting keeps the fractional part, so 6 prints as 6.0
  println!("{:?}", triangle_area(a, b, c));
  Ok(())
}
