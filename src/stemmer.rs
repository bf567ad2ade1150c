//! Locale-aware suffix-stripping stemmer
//!
//! Reduces words to an approximate root so that morphological variants
//! ("translation", "translations", "translated") compare as equal before
//! fuzzy matching. Eight locales are supported; anything else falls back
//! to the English rules, which is a designed default and never an error.
//!
//! Each locale is a static, ordered table of `(suffix, replacement)`
//! pairs fed through one generic rule applier. The applier checks every
//! rule in table order against the *progressively updated* string, so an
//! earlier strip can expose a match for a later rule. That cascading is
//! part of the contract, not an accident.
//!
//! # Example
//!
//! ```
//! use banana_tm::Stemmer;
//!
//! let stemmer = Stemmer::from_locale_tag("en-US");
//! assert_eq!(stemmer.stem("translations"), "translate");
//! assert_eq!(stemmer.stem("running"), "runn");
//! ```

use std::convert::Infallible;
use std::str::FromStr;

use regex::Regex;
use tracing::debug;

/// The closed set of locales with dedicated stemming rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemmerLocale {
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
}

impl StemmerLocale {
    /// Select a locale from a locale tag
    ///
    /// Only the primary subtag (before the first `-`) is considered,
    /// case-insensitively: `"de-AT"` and `"DE"` both select German.
    /// Unknown or malformed tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split('-').next().unwrap_or(tag).to_lowercase();
        match primary.as_str() {
            "en" => StemmerLocale::English,
            "de" => StemmerLocale::German,
            "fr" => StemmerLocale::French,
            "es" => StemmerLocale::Spanish,
            "it" => StemmerLocale::Italian,
            "pt" => StemmerLocale::Portuguese,
            "nl" => StemmerLocale::Dutch,
            "ru" => StemmerLocale::Russian,
            _ => {
                debug!(tag, "no stemming rules for locale, falling back to English");
                StemmerLocale::English
            }
        }
    }
}

impl FromStr for StemmerLocale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StemmerLocale::from_tag(s))
    }
}

/// English Step 2: derivational suffix rewrites, applied in table order
const ENGLISH_STEP2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
];

/// English Step 3: a second, smaller rewrite table
const ENGLISH_STEP3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const GERMAN_RULES: &[(&str, &str)] = &[
    ("ungen", ""),
    ("igen", ""),
    ("isch", ""),
    ("lich", ""),
    ("heit", ""),
    ("keit", ""),
    ("ung", ""),
    ("en", ""),
    ("er", ""),
    ("em", ""),
    ("es", ""),
    ("e", ""),
    ("s", ""),
    ("n", ""),
];

const FRENCH_RULES: &[(&str, &str)] = &[
    ("issements", ""),
    ("issement", ""),
    ("atrice", ""),
    ("ations", ""),
    ("ation", ""),
    ("ateur", ""),
    ("euses", ""),
    ("euse", ""),
    ("ement", ""),
    ("ments", ""),
    ("ment", ""),
    ("ives", ""),
    ("ive", ""),
    ("ées", ""),
    ("ée", ""),
    ("és", ""),
    ("é", ""),
    ("er", ""),
    ("es", ""),
    ("e", ""),
    ("s", ""),
];

const SPANISH_RULES: &[(&str, &str)] = &[
    ("amientos", ""),
    ("imientos", ""),
    ("amiento", ""),
    ("imiento", ""),
    ("aciones", ""),
    ("ación", ""),
    ("adores", ""),
    ("adora", ""),
    ("ador", ""),
    ("antes", ""),
    ("ante", ""),
    ("anza", ""),
    ("mente", ""),
    ("idades", ""),
    ("idad", ""),
    ("ar", ""),
    ("er", ""),
    ("ir", ""),
    ("as", ""),
    ("os", ""),
    ("es", ""),
    ("a", ""),
    ("o", ""),
    ("e", ""),
    ("s", ""),
];

const ITALIAN_RULES: &[(&str, &str)] = &[
    ("azioni", ""),
    ("azione", ""),
    ("amenti", ""),
    ("imenti", ""),
    ("amento", ""),
    ("imento", ""),
    ("atore", ""),
    ("atori", ""),
    ("mente", ""),
    ("ando", ""),
    ("endo", ""),
    ("are", ""),
    ("ere", ""),
    ("ire", ""),
    ("i", ""),
    ("e", ""),
    ("a", ""),
    ("o", ""),
];

const PORTUGUESE_RULES: &[(&str, &str)] = &[
    ("amentos", ""),
    ("imentos", ""),
    ("amento", ""),
    ("imento", ""),
    ("adoras", ""),
    ("adores", ""),
    ("ações", ""),
    ("ação", ""),
    ("ador", ""),
    ("ante", ""),
    ("mente", ""),
    ("idades", ""),
    ("idade", ""),
    ("ar", ""),
    ("er", ""),
    ("ir", ""),
    ("as", ""),
    ("os", ""),
    ("es", ""),
    ("a", ""),
    ("o", ""),
    ("e", ""),
    ("s", ""),
];

const DUTCH_RULES: &[(&str, &str)] = &[
    ("heden", ""),
    ("ingen", ""),
    ("eren", ""),
    ("ende", ""),
    ("lijk", ""),
    ("baar", ""),
    ("ing", ""),
    ("en", ""),
    ("er", ""),
    ("e", ""),
    ("s", ""),
];

const RUSSIAN_RULES: &[(&str, &str)] = &[
    ("иями", ""),
    ("ями", ""),
    ("ами", ""),
    ("ости", ""),
    ("ость", ""),
    ("иях", ""),
    ("его", ""),
    ("ого", ""),
    ("ему", ""),
    ("ому", ""),
    ("ыми", ""),
    ("ими", ""),
    ("ать", ""),
    ("ять", ""),
    ("еть", ""),
    ("ить", ""),
    ("ает", ""),
    ("яет", ""),
    ("ают", ""),
    ("яют", ""),
    ("ует", ""),
    ("ла", ""),
    ("ло", ""),
    ("ли", ""),
    ("ов", ""),
    ("ев", ""),
    ("ей", ""),
    ("ам", ""),
    ("ям", ""),
    ("ах", ""),
    ("ях", ""),
    ("ом", ""),
    ("ем", ""),
    ("ый", ""),
    ("ий", ""),
    ("ая", ""),
    ("яя", ""),
    ("ое", ""),
    ("ее", ""),
    ("ую", ""),
    ("юю", ""),
    ("ы", ""),
    ("и", ""),
    ("а", ""),
    ("я", ""),
    ("о", ""),
    ("е", ""),
    ("у", ""),
    ("ю", ""),
    ("ь", ""),
];

/// Apply an ordered suffix-rule table to a word
///
/// Every rule is checked in order against the current form of the word.
/// A rule fires when the word ends with the suffix and the word is longer
/// than `suffix length + 2` characters; the suffix is then replaced and
/// the loop continues with the updated string. Later rules may therefore
/// match a form produced by an earlier rule.
fn apply_suffix_rules(word: &str, rules: &[(&str, &str)]) -> String {
    let mut current = word.to_string();
    for (suffix, replacement) in rules {
        if current.chars().count() > suffix.chars().count() + 2 {
            if let Some(stem) = current.strip_suffix(suffix) {
                current = format!("{}{}", stem, replacement);
            }
        }
    }
    current
}

fn contains_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// Simplified Porter pipeline: plural strip, -ed/-ing strip, two
/// derivational rewrite tables.
fn stem_english(word: &str) -> String {
    let mut word = word.to_string();

    // Step 1a: plurals
    if word.ends_with("sses") {
        word.truncate(word.len() - 2);
    } else if let Some(stem) = word.strip_suffix("ies") {
        word = format!("{}i", stem);
    } else if word.ends_with('s') && !word.ends_with("ss") && word.chars().count() > 3 {
        word.pop();
    }

    // Step 1b: -eed/-ed/-ing, only when a vowel remains in the stem
    if let Some(stem) = word.strip_suffix("eed") {
        if contains_vowel(stem) {
            word = format!("{}ee", stem);
        }
    } else if let Some(stem) = word.strip_suffix("ed") {
        if contains_vowel(stem) {
            word = stem.to_string();
        }
    } else if let Some(stem) = word.strip_suffix("ing") {
        if contains_vowel(stem) {
            word = stem.to_string();
        }
    }

    let word = apply_suffix_rules(&word, ENGLISH_STEP2);
    apply_suffix_rules(&word, ENGLISH_STEP3)
}

/// A per-locale word normalizer
///
/// Construct one per locale and reuse it; stemming itself is pure and
/// the stemmer is freely shareable across threads.
#[derive(Debug, Clone)]
pub struct Stemmer {
    locale: StemmerLocale,
    word_pattern: Regex,
}

impl Stemmer {
    /// Create a stemmer for the given locale
    pub fn new(locale: StemmerLocale) -> Self {
        Stemmer {
            locale,
            // Tokens with at least one Latin or Cyrillic letter get stemmed;
            // everything else passes through stem_text untouched
            word_pattern: Regex::new(r"[\p{Latin}\p{Cyrillic}]")
                .expect("word pattern is a fixed, valid expression"),
        }
    }

    /// Create a stemmer from a locale tag such as `"pt-BR"` or `"de"`
    ///
    /// Unknown tags fall back to English, matching [`StemmerLocale::from_tag`].
    pub fn from_locale_tag(tag: &str) -> Self {
        Self::new(StemmerLocale::from_tag(tag))
    }

    /// The locale this stemmer applies rules for
    pub fn locale(&self) -> StemmerLocale {
        self.locale
    }

    /// Reduce a single word to its approximate root
    ///
    /// The word is lowercased first; the result is always lowercase.
    pub fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        match self.locale {
            StemmerLocale::English => stem_english(&word),
            StemmerLocale::German => apply_suffix_rules(&word, GERMAN_RULES),
            StemmerLocale::French => apply_suffix_rules(&word, FRENCH_RULES),
            StemmerLocale::Spanish => apply_suffix_rules(&word, SPANISH_RULES),
            StemmerLocale::Italian => apply_suffix_rules(&word, ITALIAN_RULES),
            StemmerLocale::Portuguese => apply_suffix_rules(&word, PORTUGUESE_RULES),
            StemmerLocale::Dutch => apply_suffix_rules(&word, DUTCH_RULES),
            StemmerLocale::Russian => apply_suffix_rules(&word, RUSSIAN_RULES),
        }
    }

    /// Stem each word in a slice, preserving order and length
    pub fn stem_words(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|w| self.stem(w)).collect()
    }

    /// Stem the words of a whole text
    ///
    /// The text is split on single spaces. Tokens containing at least one
    /// Latin or Cyrillic letter are stemmed; pure punctuation, numbers
    /// and other symbols pass through unchanged. Tokens are rejoined with
    /// a single space.
    pub fn stem_text(&self, text: &str) -> String {
        text.split(' ')
            .map(|token| {
                if self.word_pattern.is_match(token) {
                    self.stem(token)
                } else {
                    token.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
