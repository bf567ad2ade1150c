//! End-to-end tests for the matching pipeline
//!
//! Exercises the components the way the translation-memory store uses
//! them: segment a document into units, normalize the units, rank each
//! one against a corpus of previously translated strings.

use crate::{
    agrep, best_match, find_matches, ngram_similarity, MatchConfig, Segmenter, Stemmer,
};

#[test]
fn test_segment_then_match_pipeline() {
    let corpus = vec![
        "Your changes have been saved.".to_string(),
        "Your changes could not be saved.".to_string(),
        "The page has been deleted.".to_string(),
    ];

    let segmenter = Segmenter::from_locale_tag("en");
    let document = "Your changes have been saved. The page has been deleted.";
    let units = segmenter.segment_sentences(document);
    assert_eq!(units.len(), 2);

    let config = MatchConfig::default().with_threshold(0.8);
    for unit in &units {
        let best = best_match(&config, unit, &corpus).unwrap();
        assert_eq!(best.score, 1.0, "expected an exact reuse hit for {:?}", unit);
    }
}

#[test]
fn test_near_match_surfaces_closest_prior_translation() {
    let corpus = vec![
        "Upload a file".to_string(),
        "Upload the files".to_string(),
        "Download a file".to_string(),
    ];

    let config = MatchConfig::default().with_threshold(0.5).with_max_results(2);
    let matches = find_matches(&config, "upload a files", &corpus);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].text, "Upload a file");
    assert!(matches[0].score > matches[1].score);
}

#[test]
fn test_stemming_normalizes_units_before_matching() {
    let stemmer = Stemmer::from_locale_tag("en");

    // Morphological variants converge on the same normalized form
    let a = stemmer.stem_text("saving the translations");
    let b = stemmer.stem_text("saved the translation");
    assert_eq!(a, "sav the translate");
    assert_eq!(a, b);

    // which makes the fuzzy score an exact hit
    let config = MatchConfig::default();
    let best = best_match(&config, &a, &[b]).unwrap();
    assert_eq!(best.score, 1.0);
}

#[test]
fn test_cjk_document_pipeline() {
    let segmenter = Segmenter::from_locale_tag("zh-Hans");
    let units = segmenter.segment_sentences("你好。世界！");
    assert_eq!(units, vec!["你好。", "世界！"]);

    let corpus = vec!["你好。".to_string()];
    let config = MatchConfig::default();
    let best = best_match(&config, &units[0], &corpus).unwrap();
    assert_eq!(best.score, 1.0);
}

#[test]
fn test_agrep_prefilter_agrees_with_ranking() {
    let corpus = vec![
        "hello world".to_string(),
        "hallo world".to_string(),
        "entirely different".to_string(),
    ];

    let prefiltered: Vec<String> = corpus
        .iter()
        .filter(|entry| agrep("hello world", &entry.to_lowercase(), 3))
        .cloned()
        .collect();
    assert_eq!(prefiltered.len(), 2);

    let config = MatchConfig::default().with_threshold(0.7);
    let full = find_matches(&config, "hello world", &corpus);
    let pre = find_matches(&config, "hello world", &prefiltered);
    assert_eq!(full, pre);
}

#[test]
fn test_ngram_similarity_agrees_on_rankings() {
    // N-gram and edit-distance similarity should agree on which of two
    // candidates is closer for a clear-cut case
    let close = ngram_similarity("hello world", "hallo world", 3);
    let far = ngram_similarity("hello world", "entirely different", 3);
    assert!(close > far);
}
