//! Text metrics pipeline
//!
//! tokenize -> count -> score -> age bracket. Everything here is pure except
//! `analyze_file`, which reads the text before handing it to `analyze_text`.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ReadabilityError, Result};
use crate::scoring::{AgeSet, ScoreSet};
use crate::syllables::{count_polysyllables, count_syllables_in_text};
use crate::tokenize::{count_characters, tokenize};

/// Raw counts derived once from the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TokenCounts {
  pub words: usize,
  pub sentences: usize,
  pub characters: usize,
  pub syllables: usize,
  pub polysyllables: usize,
}

impl TokenCounts {
  pub fn from_text(text: &str) -> Self {
    let tokens = tokenize(text);

    Self {
      words: tokens.words.len(),
      sentences: tokens.sentences.len(),
      characters: count_characters(text),
      syllables: count_syllables_in_text(&tokens.words),
      polysyllables: count_polysyllables(&tokens.words),
    }
  }
}

/// Result of analyzing one text
#[derive(Debug, Clone, PartialEq)]
pub struct TextReport {
  pub counts: TokenCounts,
  pub scores: ScoreSet,
  pub ages: AgeSet,
  pub average_age: f64,
}

impl TextReport {
  /// True when a zero word or sentence count left a score non-finite
  pub fn is_degenerate(&self) -> bool {
    self.counts.words == 0 || self.counts.sentences == 0
  }
}

pub fn analyze_text(text: &str) -> TextReport {
  let counts = TokenCounts::from_text(text);
  let scores = ScoreSet::from_counts(&counts);
  let ages = AgeSet::from_scores(&scores);
  let average_age = ages.average();

  debug!(?counts, ?scores, "analyzed text");

  TextReport { counts, scores, ages, average_age }
}

pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<TextReport> {
  let path = path.as_ref();
  let text = fs::read_to_string(path).map_err(|e| ReadabilityError::io(path, e))?;

  debug!(path = %path.display(), bytes = text.len(), "read text");

  Ok(analyze_text(&text))
}
