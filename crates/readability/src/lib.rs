//! Readability scoring for plain text
//!
//! Tokenizes text into words and sentences, counts characters and syllables,
//! and scores the result with four classic readability formulas. Each score
//! maps to an approximate reader age.

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod scoring;
pub mod syllables;
pub mod tokenize;

pub use config::ReadabilityConfig;
pub use error::{ReadabilityError, Result};
pub use metrics::{analyze_file, analyze_text, TextReport, TokenCounts};
pub use report::{format_report, OutputFormat, ScoreSelection};
pub use scoring::{age_for, age_for_score, ScoreKind, ScoreSet};
