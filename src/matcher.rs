//! Fuzzy matching against a translation-memory corpus
//!
//! Given a query string and a corpus of previously translated source
//! strings, this module ranks the corpus by similarity to the query so a
//! translator can reuse (or lightly edit) an existing translation instead
//! of starting from scratch.
//!
//! Scoring is case-insensitive Levenshtein similarity; the returned
//! [`Match`] values carry the original corpus text untouched.
//!
//! # Example
//!
//! ```
//! use banana_tm::{find_matches, MatchConfig};
//!
//! let corpus = vec![
//!     "Save the page".to_string(),
//!     "Save your changes".to_string(),
//!     "Delete the page".to_string(),
//! ];
//!
//! let config = MatchConfig::default().with_threshold(0.6);
//! let matches = find_matches(&config, "save the page", &corpus);
//!
//! assert_eq!(matches[0].text, "Save the page");
//! assert_eq!(matches[0].score, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::levenshtein_distance;

/// A single translation-memory match
///
/// Carries the original corpus text (not the lowercased form used for
/// scoring), the similarity score in `[0.0, 1.0]`, and the raw edit
/// distance that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The matched corpus entry, exactly as it appeared in the corpus
    pub text: String,
    /// Similarity score: `1 - distance / max_len`
    pub score: f64,
    /// Levenshtein distance between the lowercased query and entry
    pub distance: usize,
}

/// Configuration for fuzzy matching
///
/// A plain value: updates go through the copy-producing `with_*` setters,
/// so a config shared across concurrent matching calls can never be
/// mutated under them.
///
/// Out-of-range values are clamped rather than rejected: `threshold` to
/// `[0.0, 1.0]`, `max_results` to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchConfig {
    threshold: f64,
    max_results: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            threshold: 0.7,
            max_results: 5,
        }
    }
}

impl MatchConfig {
    /// Create a config with the default threshold (0.7) and result cap (5)
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with the given minimum similarity score
    ///
    /// Values outside `[0.0, 1.0]` are clamped into range; NaN clamps to
    /// `0.0`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold >= 0.0 {
            threshold.min(1.0)
        } else {
            0.0
        };
        self
    }

    /// Return a copy with the given maximum number of results
    ///
    /// Clamped to at least 1.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    /// Minimum similarity score for a corpus entry to count as a match
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Maximum number of matches returned by [`find_matches`]
    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

/// Rank a corpus of candidate strings against a query
///
/// Both the query and every corpus entry are lowercased before scoring.
/// Entries whose similarity clears `config.threshold()` are sorted by
/// descending score and truncated to `config.max_results()`.
///
/// Entries with equal scores keep their original corpus order (stable
/// sort), so results are deterministic for a given corpus ordering.
///
/// # Arguments
///
/// * `config` - Threshold and result cap
/// * `query` - The new source text to find reuse candidates for
/// * `corpus` - Previously translated source strings, order significant
pub fn find_matches(config: &MatchConfig, query: &str, corpus: &[String]) -> Vec<Match> {
    let query = query.to_lowercase();
    let query_len = query.chars().count();

    let mut matches: Vec<Match> = Vec::new();
    for entry in corpus {
        let entry_lower = entry.to_lowercase();
        let distance = levenshtein_distance(&query, &entry_lower);
        let max_len = query_len.max(entry_lower.chars().count());
        let score = if max_len == 0 {
            1.0
        } else {
            1.0 - distance as f64 / max_len as f64
        };

        if score >= config.threshold() {
            matches.push(Match {
                text: entry.clone(),
                score,
                distance,
            });
        }
    }

    debug!(
        corpus = corpus.len(),
        above_threshold = matches.len(),
        threshold = config.threshold(),
        "ranked corpus against query"
    );

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(config.max_results());
    matches
}

/// Return the single best match for a query, if any
///
/// Equivalent to the first element of [`find_matches`]; `None` when the
/// corpus is empty or nothing clears the threshold.
pub fn best_match(config: &MatchConfig, query: &str, candidates: &[String]) -> Option<Match> {
    find_matches(config, query, candidates).into_iter().next()
}

/// Approximate-grep predicate
///
/// True iff the Levenshtein distance between `pattern` and `text` is at
/// most `max_distance`. Unlike [`find_matches`] this compares the inputs
/// as given, without lowercasing. Useful as a cheap filter over a large
/// corpus before full ranking.
///
/// # Example
///
/// ```
/// use banana_tm::agrep;
///
/// assert!(agrep("hello", "hallo", 1));
/// assert!(!agrep("hello", "halllo", 1));
/// ```
pub fn agrep(pattern: &str, text: &str, max_distance: usize) -> bool {
    levenshtein_distance(pattern, text) <= max_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.threshold(), 0.7);
        assert_eq!(config.max_results(), 5);
        assert_eq!(MatchConfig::new(), config);
    }

    #[test]
    fn test_config_threshold_clamping() {
        assert_eq!(MatchConfig::new().with_threshold(1.5).threshold(), 1.0);
        assert_eq!(MatchConfig::new().with_threshold(-1.0).threshold(), 0.0);
        assert_eq!(MatchConfig::new().with_threshold(0.5).threshold(), 0.5);
        assert_eq!(MatchConfig::new().with_threshold(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn test_config_max_results_clamping() {
        assert_eq!(MatchConfig::new().with_max_results(0).max_results(), 1);
        assert_eq!(MatchConfig::new().with_max_results(10).max_results(), 10);
    }

    #[test]
    fn test_config_setters_do_not_mutate_original() {
        let base = MatchConfig::new();
        let _updated = base.with_threshold(0.1).with_max_results(99);
        assert_eq!(base.threshold(), 0.7);
        assert_eq!(base.max_results(), 5);
    }

    #[test]
    fn test_find_matches_exact() {
        let corpus = corpus(&["Save the page", "Delete the page"]);
        let config = MatchConfig::new();
        let matches = find_matches(&config, "save the page", &corpus);

        assert_eq!(matches[0].text, "Save the page");
        assert_eq!(matches[0].score, 1.0);
        assert_eq!(matches[0].distance, 0);
    }

    #[test]
    fn test_find_matches_preserves_original_casing() {
        let corpus = corpus(&["SAVE THE PAGE"]);
        let config = MatchConfig::new();
        let matches = find_matches(&config, "save the page", &corpus);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "SAVE THE PAGE");
    }

    #[test]
    fn test_find_matches_respects_threshold() {
        let corpus = corpus(&["hello world", "completely unrelated text"]);
        let config = MatchConfig::new().with_threshold(0.8);
        let matches = find_matches(&config, "hello world", &corpus);

        assert_eq!(matches.len(), 1);
        for m in &matches {
            assert!(m.score >= 0.8);
        }
    }

    #[test]
    fn test_find_matches_respects_max_results() {
        let corpus = corpus(&["aaa", "aab", "aba", "baa", "aac", "caa"]);
        let config = MatchConfig::new().with_threshold(0.0).with_max_results(3);
        let matches = find_matches(&config, "aaa", &corpus);

        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_find_matches_sorted_descending() {
        let corpus = corpus(&["hallo", "hello", "hullo there"]);
        let config = MatchConfig::new().with_threshold(0.0).with_max_results(10);
        let matches = find_matches(&config, "hello", &corpus);

        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(matches[0].text, "hello");
    }

    #[test]
    fn test_find_matches_stable_tie_break() {
        // Identical entries score identically; corpus order must survive
        let corpus = corpus(&["abcd", "ABCD", "abcd"]);
        let config = MatchConfig::new().with_threshold(0.0).with_max_results(10);
        let matches = find_matches(&config, "abcd", &corpus);

        let texts: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["abcd", "ABCD", "abcd"]);
    }

    #[test]
    fn test_find_matches_empty_corpus() {
        let config = MatchConfig::new();
        assert!(find_matches(&config, "anything", &[]).is_empty());
    }

    #[test]
    fn test_find_matches_empty_query_and_entry() {
        let corpus = corpus(&[""]);
        let config = MatchConfig::new();
        let matches = find_matches(&config, "", &corpus);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1.0);
        assert_eq!(matches[0].distance, 0);
    }

    #[test]
    fn test_best_match() {
        let corpus = corpus(&["goodbye world", "hello world"]);
        let config = MatchConfig::new().with_threshold(0.5);

        let best = best_match(&config, "hello world", &corpus).unwrap();
        assert_eq!(best.text, "hello world");
    }

    #[test]
    fn test_best_match_none_below_threshold() {
        let corpus = corpus(&["zzzzzzzz"]);
        let config = MatchConfig::new().with_threshold(0.9);
        assert!(best_match(&config, "hello", &corpus).is_none());
    }

    #[test]
    fn test_best_match_empty_corpus() {
        let config = MatchConfig::new();
        assert!(best_match(&config, "hello", &[]).is_none());
    }

    #[test]
    fn test_agrep() {
        assert!(agrep("hello", "hello", 0));
        assert!(agrep("hello", "hallo", 1));
        assert!(!agrep("hello", "halllo", 1));
        assert!(agrep("hello", "halllo", 2));
    }

    #[test]
    fn test_agrep_is_case_sensitive() {
        assert!(!agrep("hello", "HELLO", 1));
    }

    #[test]
    fn test_match_json_shape() {
        let m = Match {
            text: "Save the page".to_string(),
            score: 0.92,
            distance: 1,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["text"], "Save the page");
        assert_eq!(json["score"], 0.92);
        assert_eq!(json["distance"], 1);

        let back: Match = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }
}
