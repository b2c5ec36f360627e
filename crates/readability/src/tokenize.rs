//! Word and sentence tokenization
//!
//! Splits raw text into words on runs of whitespace and into sentences on a
//! terminal punctuation mark followed by whitespace. Tokens are only counted,
//! so no normalization happens beyond the split itself.

use regex::Regex;
use std::sync::LazyLock;

/// `.`, `!` or `?` followed by at least one `\s` whitespace character
const SENTENCE_BOUNDARY_PATTERN: &str = r"[.!?][ \t\n\x0B\x0C\r]+";

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(SENTENCE_BOUNDARY_PATTERN).expect("sentence boundary pattern is valid")
});

/// Words and sentences borrowed from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
  pub words: Vec<&'a str>,
  pub sentences: Vec<&'a str>,
}

pub fn tokenize(text: &str) -> Tokens<'_> {
  Tokens { words: split_words(text), sentences: split_sentences(text) }
}

pub fn split_words(text: &str) -> Vec<&str> {
  text.split(is_blank).filter(|word| !word.is_empty()).collect()
}

fn has_text(piece: &&str) -> bool {
  !piece.chars().all(is_blank)
}

/// Blank pieces before the first and after the last sentence are dropped;
/// blank pieces between sentences still count
pub fn split_sentences(text: &str) -> Vec<&str> {
  let pieces: Vec<&str> = SENTENCE_BOUNDARY.split(text).collect();

  let Some(start) = pieces.iter().position(has_text) else {
    return Vec::new();
  };
  let end = pieces.iter().rposition(has_text).unwrap_or(start);

  pieces[start..=end].to_vec()
}

/// Matches the `\s` class: space, tab, newline, vertical tab, form feed, carriage return
fn is_blank(ch: char) -> bool {
  matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Count characters, excluding whitespace
pub fn count_characters(text: &str) -> usize {
  text.chars().filter(|ch| !is_blank(*ch)).count()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tokenize_two_sentences() {
    let tokens = tokenize("Hello world. This is a test.");
    assert_eq!(tokens.words, vec!["Hello", "world.", "This", "is", "a", "test."]);
    assert_eq!(tokens.sentences, vec!["Hello world", "This is a test."]);
  }

  #[test]
  fn test_tokenize_single_word() {
    let tokens = tokenize("Cat.");
    assert_eq!(tokens.words.len(), 1);
    assert_eq!(tokens.sentences.len(), 1);
  }

  #[test]
  fn test_split_sentences_mixed_terminators() {
    let text = "Is it raining? Yes! It is.\nBring a coat.\n";
    assert_eq!(split_sentences(text), vec!["Is it raining", "Yes", "It is", "Bring a coat"]);
  }

  #[test]
  fn test_split_sentences_needs_whitespace_after_terminator() {
    // Decimal points and abbreviations glued to the next word do not split
    assert_eq!(split_sentences("Pi is 3.14 roughly.").len(), 1);
    assert_eq!(split_sentences("See e.g.this one.").len(), 1);
  }

  #[test]
  fn test_split_sentences_keeps_interior_blanks() {
    assert_eq!(split_sentences("Wait. . . Really.\n"), vec!["Wait", "", "", "Really"]);
    assert_eq!(split_sentences("\n. Leading and trailing.  \n").len(), 1);
  }

  #[test]
  fn test_no_break_space_is_not_whitespace() {
    let text = "fifty\u{a0}euros";
    assert_eq!(split_words(text), vec![text]);
    assert_eq!(count_characters(text), 11);
    assert_eq!(split_sentences("Done.\u{a0}Next.").len(), 1);
  }

  #[test]
  fn test_split_words_runs_of_whitespace() {
    assert_eq!(split_words("  one\t\ttwo \n three  "), vec!["one", "two", "three"]);
  }

  #[test]
  fn test_empty_and_blank_text() {
    assert!(split_words("").is_empty());
    assert!(split_sentences("").is_empty());
    assert!(split_words(" \n\t ").is_empty());
    assert!(split_sentences(" \n\t ").is_empty());
  }

  #[test]
  fn test_count_characters() {
    assert_eq!(count_characters("Hello world. This is a test."), 23);
    assert_eq!(count_characters("a\tb\nc\r\n d"), 4);
    assert_eq!(count_characters(""), 0);
    assert_eq!(count_characters("naïve café"), 9);
  }
}
