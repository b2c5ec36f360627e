//! Heuristic syllable counting
//!
//! Counts groups of consecutive vowels, with a silent trailing "e" removed.
//! Short words always count as a single syllable.

/// `y` counts as a vowel
const VOWELS: &str = "aeiouy";

/// Punctuation stripped from a word before counting
const STRIPPED: [char; 4] = ['.', ',', '!', '?'];

/// Words of this many characters or fewer are one syllable
const SHORT_WORD_LEN: usize = 3;

/// Words with more syllables than this are polysyllables
const POLYSYLLABLE_THRESHOLD: usize = 2;

fn normalize(word: &str) -> String {
  word.to_lowercase().chars().filter(|ch| !STRIPPED.contains(ch)).collect()
}

fn count_vowel_groups(word: &str) -> usize {
  let mut groups = 0;
  let mut prev_vowel = false;

  for ch in word.chars() {
    let is_vowel = VOWELS.contains(ch);
    if is_vowel && !prev_vowel {
      groups += 1;
    }
    prev_vowel = is_vowel;
  }

  groups
}

/// Count the syllables in a single word, never less than one
pub fn count_syllables(word: &str) -> usize {
  let word = normalize(word);
  if word.chars().count() <= SHORT_WORD_LEN {
    return 1;
  }

  let mut syllables = count_vowel_groups(&word);
  if word.ends_with('e') {
    syllables = syllables.saturating_sub(1);
  }

  syllables.max(1)
}

pub fn count_syllables_in_text(words: &[&str]) -> usize {
  words.iter().map(|word| count_syllables(word)).sum()
}

pub fn is_polysyllable(word: &str) -> bool {
  count_syllables(word) > POLYSYLLABLE_THRESHOLD
}

pub fn count_polysyllables(words: &[&str]) -> usize {
  words.iter().filter(|word| is_polysyllable(word)).count()
}
