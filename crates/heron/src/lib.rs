//! Triangle area from three side lengths
//!
//! Heron's formula: with semi-perimeter `s = (a + b + c) / 2`, the area is
//! `sqrt(s(s - a)(s - b)(s - c))`. Sides that cannot form a triangle make the
//! product negative and the area NaN.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeronError>;

#[derive(Error, Debug, PartialEq)]
pub enum HeronError {
  #[error("Expected 3 side lengths, got {found}")]
  MissingSide { found: usize },

  #[error("Invalid side length '{value}'")]
  InvalidNumber { value: String },
}

pub fn triangle_area(a: f64, b: f64, c: f64) -> f64 {
  let s = (a + b + c) / 2.0;
  (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Parse the first three whitespace-separated numbers of `input`
pub fn parse_sides(input: &str) -> Result<[f64; 3]> {
  let tokens: Vec<&str> = input.split_whitespace().take(3).collect();
  parse_side_tokens(&tokens)
}

pub fn parse_side_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<[f64; 3]> {
  if tokens.len() < 3 {
    return Err(HeronError::MissingSide { found: tokens.len() });
  }

  let mut sides = [0.0; 3];
  for (side, token) in sides.iter_mut().zip(tokens) {
    let token: &str = token.as_ref();
    *side = token.parse().map_err(|_| HeronError::InvalidNumber { value: token.to_string() })?;
  }

  Ok(sides)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_right_triangle() {
    assert_eq!(triangle_area(3.0, 4.0, 5.0), 6.0);
  }

  #[test]
  fn test_equilateral_triangle() {
    let expected = 3f64.sqrt() / 4.0 * 4.0;
    assert!((triangle_area(2.0, 2.0, 2.0) - expected).abs() < 1e-12);
  }

  #[test]
  fn test_degenerate_and_impossible() {
    assert_eq!(triangle_area(1.0, 2.0, 3.0), 0.0);
    assert!(triangle_area(1.0, 1.0, 10.0).is_nan());
  }

  #[test]
  fn test_parse_sides() {
    assert_eq!(parse_sides("3 4 5").unwrap(), [3.0, 4.0, 5.0]);
    assert_eq!(parse_sides("  2.5\n1e1\t7 99").unwrap(), [2.5, 10.0, 7.0]);
  }

  #[test]
  fn test_parse_sides_errors() {
    assert_eq!(parse_sides("3 4"), Err(HeronError::MissingSide { found: 2 }));
    assert_eq!(parse_sides(""), Err(HeronError::MissingSide { found: 0 }));
    assert_eq!(
      parse_sides("3 four 5"),
      Err(HeronError::InvalidNumber { value: "four".to_string() })
    );
  }
}
