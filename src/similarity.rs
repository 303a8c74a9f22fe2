//! Directional match ratio between two analyzed phrases.
//!
//! The ratio answers "how much of the input phrase is present in the other
//! one". The denominator counts the input's own words (tokens that are not
//! dictionary-origin); the numerator counts every input token, expansions
//! included, that appears in the comparison sequence with the same text,
//! position and origin. The numerator is clamped to the denominator so
//! matching expansions can never push the ratio above 1.0.
//!
//! # Examples
//!
//! ```
//! use lexis::similarity::string_diff_ratio;
//!
//! assert_eq!(string_diff_ratio("Малый пер.", "Малый пр.").unwrap(), 0.5);
//! assert_eq!(string_diff_ratio("Малый пер.", "Малый пер.").unwrap(), 1.0);
//! ```

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::lexeme::LexemeAnalyzer;
use crate::analysis::token::Token;
use crate::config::MatchConfig;
use crate::error::{LexisError, Result};

/// Outcome of scoring one token sequence against another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Matched input tokens after clamping to `countable`.
    pub matched: usize,
    /// Matched input tokens before clamping.
    pub raw_matches: usize,
    /// Input tokens that are not dictionary-origin (the denominator).
    pub countable: usize,
    /// `matched / countable`.
    pub ratio: f64,
}

/// Score `input` against `compare_with`.
///
/// Fails with [`LexisError::NoComparableTokens`] when `input` has no
/// non-dictionary tokens.
pub fn score(input: &[Token], compare_with: &[Token]) -> Result<MatchReport> {
    let countable = input.iter().filter(|t| !t.dictionary_origin).count();
    if countable == 0 {
        return Err(LexisError::no_comparable_tokens(
            "input phrase has no words of its own to compare",
        ));
    }

    let candidates: AHashSet<&Token> = compare_with.iter().collect();
    let raw_matches = input.iter().filter(|t| candidates.contains(t)).count();
    let matched = raw_matches.min(countable);

    Ok(MatchReport {
        matched,
        raw_matches,
        countable,
        ratio: matched as f64 / countable as f64,
    })
}

/// Ratio of `input` found in `compare_with`. See [`score`].
pub fn ratio(input: &[Token], compare_with: &[Token]) -> Result<f64> {
    score(input, compare_with).map(|report| report.ratio)
}

/// Analyze both phrases with the built-in configuration and return the ratio.
pub fn string_diff_ratio(input: &str, compare_with: &str) -> Result<f64> {
    RatioScorer::default().ratio(input, compare_with)
}

/// Scores phrase pairs using one shared analyzer.
#[derive(Clone, Default)]
pub struct RatioScorer {
    analyzer: LexemeAnalyzer,
}

impl RatioScorer {
    /// Create a scorer for the given configuration.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_analyzer(LexemeAnalyzer::new(config))
    }

    /// Create a scorer around an existing analyzer.
    pub fn with_analyzer(analyzer: LexemeAnalyzer) -> Self {
        RatioScorer { analyzer }
    }

    /// Get the analyzer used by this scorer.
    pub fn analyzer(&self) -> &LexemeAnalyzer {
        &self.analyzer
    }

    /// Analyze both phrases and produce a full report.
    pub fn score(&self, input: &str, compare_with: &str) -> Result<MatchReport> {
        let input_tokens = self.analyzer.analyze(input)?;
        let compare_tokens = self.analyzer.analyze(compare_with)?;
        let report = score(&input_tokens, &compare_tokens)?;

        debug!(
            "matched {}/{} (raw {}) of {:?} in {:?}",
            report.matched, report.countable, report.raw_matches, input, compare_with
        );

        Ok(report)
    }

    /// Analyze both phrases and return only the ratio.
    pub fn ratio(&self, input: &str, compare_with: &str) -> Result<f64> {
        self.score(input, compare_with).map(|report| report.ratio)
    }
}
