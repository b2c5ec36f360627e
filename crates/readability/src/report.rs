//! Report rendering
//!
//! Turns a `TextReport` into the text printed on stdout. Pretty output keeps
//! the classic layout (counts, one line per score, average age); JSON and
//! compact output are meant for scripts.

use clap::ValueEnum;
use colored::Colorize;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ReadabilityError;
use crate::metrics::TextReport;
use crate::scoring::ScoreKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
  Compact,
}

/// Which scores to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum ScoreSelection {
  Ari,
  Fk,
  Smog,
  Cl,
  #[default]
  All,
}

impl ScoreSelection {
  pub fn kinds(self) -> Vec<ScoreKind> {
    match self {
      ScoreSelection::Ari => vec![ScoreKind::Ari],
      ScoreSelection::Fk => vec![ScoreKind::Fk],
      ScoreSelection::Smog => vec![ScoreKind::Smog],
      ScoreSelection::Cl => vec![ScoreKind::Cl],
      ScoreSelection::All => ScoreKind::ALL.to_vec(),
    }
  }
}

impl FromStr for ScoreSelection {
  type Err = ReadabilityError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value.trim().to_ascii_lowercase().as_str() {
      "ari" => Ok(ScoreSelection::Ari),
      "fk" => Ok(ScoreSelection::Fk),
      "smog" => Ok(ScoreSelection::Smog),
      "cl" => Ok(ScoreSelection::Cl),
      "all" => Ok(ScoreSelection::All),
      _ => Err(ReadabilityError::invalid_selection(value)),
    }
  }
}

impl TryFrom<String> for ScoreSelection {
  type Error = ReadabilityError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl fmt::Display for ScoreSelection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      ScoreSelection::Ari => "ARI",
      ScoreSelection::Fk => "FK",
      ScoreSelection::Smog => "SMOG",
      ScoreSelection::Cl => "CL",
      ScoreSelection::All => "all",
    };
    write!(f, "{label}")
  }
}

pub fn format_report(report: &TextReport, selection: ScoreSelection, format: OutputFormat) -> String {
  match format {
    OutputFormat::Pretty => format_pretty(report, selection),
    OutputFormat::Json => format_json(report, selection),
    OutputFormat::Compact => format_compact(report, selection),
  }
}

fn format_age(age: Option<u32>) -> String {
  age.map_or_else(|| "unknown".to_string(), |age| age.to_string())
}

fn format_pretty(report: &TextReport, selection: ScoreSelection) -> String {
  let counts = &report.counts;
  let mut output = String::new();

  output.push_str(&format!("Words: {}\n", counts.words));
  output.push_str(&format!("Sentences: {}\n", counts.sentences));
  output.push_str(&format!("Characters: {}\n", counts.characters));
  output.push_str(&format!("Syllables: {}\n", counts.syllables));
  output.push_str(&format!("Polysyllables: {}\n", counts.polysyllables));
  output.push('\n');

  for kind in selection.kinds() {
    let score = report.scores.get(kind);
    let age = match report.ages.get(kind) {
      Some(age) => format!("about {age}-year-olds"),
      None => "age unknown".to_string(),
    };
    output.push_str(&format!("{}: {:.2} ({}).\n", kind.title().bold(), score, age));
  }

  let summary = if report.average_age.is_nan() {
    "The reader age for this text could not be estimated.".to_string()
  } else {
    format!("This text should be understood in average by {:.2}-year-olds.", report.average_age)
  };
  output.push_str(&format!("\n{}\n", summary.bright_cyan()));

  output
}

fn format_json(report: &TextReport, selection: ScoreSelection) -> String {
  let scores: serde_json::Map<String, serde_json::Value> = selection
    .kinds()
    .into_iter()
    .map(|kind| {
      let entry = serde_json::json!({
        "title": kind.title(),
        "score": report.scores.get(kind),
        "age": report.ages.get(kind),
      });
      (kind.key().to_string(), entry)
    })
    .collect();

  let output = serde_json::json!({
    "counts": report.counts,
    "scores": scores,
    "ages": report.ages,
    "average_age": report.average_age,
  });

  serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

fn format_compact(report: &TextReport, selection: ScoreSelection) -> String {
  let counts = &report.counts;
  let mut fields = vec![
    format!("words={}", counts.words),
    format!("sentences={}", counts.sentences),
    format!("characters={}", counts.characters),
    format!("syllables={}", counts.syllables),
    format!("polysyllables={}", counts.polysyllables),
  ];

  for kind in selection.kinds() {
    fields.push(format!("{}={:.2}", kind.key(), report.scores.get(kind)));
    fields.push(format!("{}_age={}", kind.key(), format_age(report.ages.get(kind))));
  }
  fields.push(format!("average_age={:.2}", report.average_age));

  fields.join(" ") + "\n"
}
