//! Readability formulas and age brackets
//!
//! Each formula is a closed-form function of the token counts. Scores are
//! grade levels; `age_for_score` converts a rounded grade into the age of a
//! typical reader. Zero words or sentences are not guarded against, so a
//! degenerate text produces a non-finite score.

use serde::Serialize;

use crate::metrics::TokenCounts;

/// Grade upper bound and the reader age for that grade
const AGE_BRACKETS: [(i64, u32); 13] = [
  (1, 6),
  (2, 7),
  (3, 8),
  (4, 9),
  (5, 10),
  (6, 11),
  (7, 12),
  (8, 13),
  (9, 14),
  (10, 15),
  (11, 16),
  (12, 17),
  (13, 18),
];

/// Age for any grade above the last bracket
const COLLEGE_AGE: u32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
  Ari,
  Fk,
  Smog,
  Cl,
}

impl ScoreKind {
  pub const ALL: [ScoreKind; 4] = [ScoreKind::Ari, ScoreKind::Fk, ScoreKind::Smog, ScoreKind::Cl];

  pub fn title(self) -> &'static str {
    match self {
      ScoreKind::Ari => "Automated Readability Index",
      ScoreKind::Fk => "Flesch–Kincaid readability tests",
      ScoreKind::Smog => "Simple Measure of Gobbledygook",
      ScoreKind::Cl => "Coleman–Liau index",
    }
  }

  pub fn key(self) -> &'static str {
    match self {
      ScoreKind::Ari => "ari",
      ScoreKind::Fk => "fk",
      ScoreKind::Smog => "smog",
      ScoreKind::Cl => "cl",
    }
  }
}

pub fn automated_readability_index(characters: usize, words: usize, sentences: usize) -> f64 {
  let (characters, words, sentences) = (characters as f64, words as f64, sentences as f64);
  4.71 * (characters / words) + 0.5 * (words / sentences) - 21.43
}

pub fn flesch_kincaid(words: usize, syllables: usize, sentences: usize) -> f64 {
  let (words, syllables, sentences) = (words as f64, syllables as f64, sentences as f64);
  0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
}

pub fn smog(polysyllables: usize, sentences: usize) -> f64 {
  let (polysyllables, sentences) = (polysyllables as f64, sentences as f64);
  1.043 * (polysyllables * (30.0 / sentences)).sqrt() + 3.1291
}

pub fn coleman_liau(characters: usize, words: usize, sentences: usize) -> f64 {
  let (characters, words, sentences) = (characters as f64, words as f64, sentences as f64);
  let letters_per_100 = characters / words * 100.0;
  let sentences_per_100 = sentences / words * 100.0;
  0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
}

/// The four scores for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSet {
  pub ari: f64,
  pub fk: f64,
  pub smog: f64,
  pub cl: f64,
}

impl ScoreSet {
  pub fn from_counts(counts: &TokenCounts) -> Self {
    Self {
      ari: automated_readability_index(counts.characters, counts.words, counts.sentences),
      fk: flesch_kincaid(counts.words, counts.syllables, counts.sentences),
      smog: smog(counts.polysyllables, counts.sentences),
      cl: coleman_liau(counts.characters, counts.words, counts.sentences),
    }
  }

  pub fn get(&self, kind: ScoreKind) -> f64 {
    match kind {
      ScoreKind::Ari => self.ari,
      ScoreKind::Fk => self.fk,
      ScoreKind::Smog => self.smog,
      ScoreKind::Cl => self.cl,
    }
  }
}

/// Age estimate per score; `None` when the score is not finite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeSet {
  pub ari: Option<u32>,
  pub fk: Option<u32>,
  pub smog: Option<u32>,
  pub cl: Option<u32>,
}

impl AgeSet {
  pub fn from_scores(scores: &ScoreSet) -> Self {
    Self {
      ari: age_for(scores.ari),
      fk: age_for(scores.fk),
      smog: age_for(scores.smog),
      cl: age_for(scores.cl),
    }
  }

  pub fn get(&self, kind: ScoreKind) -> Option<u32> {
    match kind {
      ScoreKind::Ari => self.ari,
      ScoreKind::Fk => self.fk,
      ScoreKind::Smog => self.smog,
      ScoreKind::Cl => self.cl,
    }
  }

  /// Mean of the known ages, NaN when none are known
  pub fn average(&self) -> f64 {
    let known: Vec<u32> = ScoreKind::ALL.iter().filter_map(|kind| self.get(*kind)).collect();
    if known.is_empty() {
      return f64::NAN;
    }
    known.iter().map(|age| f64::from(*age)).sum::<f64>() / known.len() as f64
  }
}

/// Round half toward positive infinity
pub fn round_score(score: f64) -> i64 {
  (score + 0.5).floor() as i64
}

/// Map a rounded grade to a reader age
pub fn age_for_score(score: i64) -> u32 {
  AGE_BRACKETS
    .iter()
    .find(|(upper, _)| score <= *upper)
    .map_or(COLLEGE_AGE, |(_, age)| *age)
}

pub fn age_for(score: f64) -> Option<u32> {
  score.is_finite().then(|| age_for_score(round_score(score)))
}
