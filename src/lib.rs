//! Translation-memory matching core
//!
//! Pure, stateless text algorithms for finding reusable prior
//! translations: string distance and similarity, fuzzy corpus matching,
//! locale-aware stemming, and locale-aware sentence/word segmentation.
//!
//! A document is split into translation units by [`Segmenter`], units may
//! be normalized by [`Stemmer`] before comparison, and [`find_matches`]
//! ranks an existing corpus against a query unit to surface reuse
//! candidates.
//!
//! Everything here is a pure function over its inputs: no I/O, no shared
//! mutable state, safe to call concurrently. Character-level operations
//! work on Unicode scalar values (`str::chars()`).

pub mod distance;
pub mod matcher;
pub mod segmenter;
pub mod stemmer;

#[cfg(test)]
mod integration_tests;

// Re-export the matching surface for convenient access
pub use distance::{
    damerau_levenshtein_distance, levenshtein_distance, ngram_similarity, similarity,
};
pub use matcher::{agrep, best_match, find_matches, Match, MatchConfig};
pub use segmenter::{Segment, Segmenter};
pub use stemmer::{Stemmer, StemmerLocale};
