//! Locale-aware sentence and word segmentation
//!
//! Splits raw text into translation units. Two rule sets exist: a CJK
//! mode for `ja`/`zh`/`ko` (sentence-final punctuation marks a boundary
//! unconditionally, every CJK character is its own word) and a Western
//! mode (boundary heuristics around `.`/`!`/`?`, whitespace-and-
//! punctuation word splitting).
//!
//! This is deliberately a heuristic model, not full Unicode text
//! segmentation: `"Mr. Smith"` stays in one sentence because the
//! character after the period is lowercase. Offsets in the
//! position-bearing variants are char offsets into the original text.
//!
//! # Example
//!
//! ```
//! use banana_tm::Segmenter;
//!
//! let segmenter = Segmenter::from_locale_tag("en");
//! let sentences = segmenter.segment_sentences("Hello. World is great.");
//! assert_eq!(sentences, vec!["Hello.", "World is great."]);
//!
//! let cjk = Segmenter::from_locale_tag("ja");
//! assert_eq!(cjk.segment_sentences("你好。世界！"), vec!["你好。", "世界！"]);
//! ```

use serde::{Deserialize, Serialize};

/// A segment located inside the text it was produced from
///
/// `start` and `end` are char offsets (not byte offsets) into the
/// original text; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The segment text, trimmed
    pub text: String,
    /// Char offset of the first character in the original text
    pub start: usize,
    /// Char offset one past the last character
    pub end: usize,
}

/// Sentence-ending punctuation, ASCII and full-width
const SENTENCE_TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Punctuation treated as word separators in CJK mode
const CJK_PUNCTUATION: &str = "。！？、，；：「」『』（）《》〈〉…・.!?,;:\"'()[]{}";

/// Punctuation treated as word separators in Western mode
const WESTERN_SEPARATORS: &str = ",;:\"'()[]";

/// Locale-sensitive sentence and word splitter
///
/// Holds only the primary subtag of the locale tag it was created from;
/// segmentation itself is pure and the segmenter is freely shareable.
#[derive(Debug, Clone)]
pub struct Segmenter {
    locale: String,
}

impl Segmenter {
    /// Create a segmenter from a locale tag such as `"zh-Hans"` or `"en-GB"`
    ///
    /// Only the primary subtag is kept. Tags whose primary subtag is not
    /// `ja`, `zh` or `ko` (compared case-insensitively) use the Western
    /// rules; there is no error case.
    pub fn from_locale_tag(tag: &str) -> Self {
        let primary = tag.split('-').next().unwrap_or(tag);
        Segmenter {
            locale: primary.to_string(),
        }
    }

    /// The primary subtag this segmenter was created with
    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn is_cjk(&self) -> bool {
        ["ja", "zh", "ko"]
            .iter()
            .any(|l| self.locale.eq_ignore_ascii_case(l))
    }

    /// Split text into sentences
    ///
    /// Sentences keep their terminating punctuation and are trimmed of
    /// surrounding whitespace; empty sentences are dropped. Any trailing
    /// text without a terminator is emitted as a final sentence.
    pub fn segment_sentences(&self, text: &str) -> Vec<String> {
        if self.is_cjk() {
            self.segment_sentences_cjk(text)
        } else {
            self.segment_sentences_western(text)
        }
    }

    /// CJK rule: every sentence-ending mark is a boundary, no lookahead.
    fn segment_sentences_cjk(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut buffer = String::new();

        for c in text.chars() {
            buffer.push(c);
            if SENTENCE_TERMINATORS.contains(&c) {
                push_trimmed(&mut sentences, &buffer);
                buffer.clear();
            }
        }
        push_trimmed(&mut sentences, &buffer);

        sentences
    }

    /// Western rule: a terminator ends a sentence only at end of text,
    /// before a newline, or before a space followed by an uppercase ASCII
    /// letter (or nothing). Abbreviations like "Mr. Smith" therefore stay
    /// unsplit.
    fn segment_sentences_western(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut buffer = String::new();

        for i in 0..chars.len() {
            buffer.push(chars[i]);
            if SENTENCE_TERMINATORS.contains(&chars[i]) && boundary_after(&chars, i) {
                push_trimmed(&mut sentences, &buffer);
                buffer.clear();
            }
        }
        push_trimmed(&mut sentences, &buffer);

        sentences
    }

    /// Split text into words
    ///
    /// CJK mode treats every non-whitespace, non-punctuation character as
    /// a word of its own. Western mode splits on whitespace and common
    /// punctuation, then strips leading and trailing `.` `!` `?` from
    /// each token. Empty tokens are dropped in both modes.
    pub fn segment_words(&self, text: &str) -> Vec<String> {
        if self.is_cjk() {
            text.chars()
                .filter(|c| !c.is_whitespace() && !CJK_PUNCTUATION.contains(*c))
                .map(|c| c.to_string())
                .collect()
        } else {
            text.split(|c: char| c.is_whitespace() || WESTERN_SEPARATORS.contains(c))
                .map(|token| token.trim_matches(|c| matches!(c, '.' | '!' | '?')))
                .filter(|token| !token.is_empty())
                .map(|token| token.to_string())
                .collect()
        }
    }

    /// Number of sentences in the text
    pub fn sentence_count(&self, text: &str) -> usize {
        self.segment_sentences(text).len()
    }

    /// Number of words in the text
    pub fn word_count(&self, text: &str) -> usize {
        self.segment_words(text).len()
    }

    /// Number of non-whitespace characters in the text
    pub fn char_count(&self, text: &str) -> usize {
        text.chars().filter(|c| !c.is_whitespace()).count()
    }

    /// Split into sentences and locate each one in the original text
    ///
    /// Positions are recovered by a forward-only search: each sentence is
    /// looked up starting at the end offset of the previous match. A
    /// sentence whose trimmed text no longer occurs there (because
    /// trimming altered it) is omitted from the result rather than given
    /// a wrong position.
    pub fn segment_sentences_with_positions(&self, text: &str) -> Vec<Segment> {
        locate_segments(text, self.segment_sentences(text))
    }

    /// Split into words and locate each one in the original text
    ///
    /// Same forward-only, best-effort contract as
    /// [`segment_sentences_with_positions`](Self::segment_sentences_with_positions).
    pub fn segment_words_with_positions(&self, text: &str) -> Vec<Segment> {
        locate_segments(text, self.segment_words(text))
    }
}

fn push_trimmed(out: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

/// Is the terminator at `i` a Western sentence boundary?
fn boundary_after(chars: &[char], i: usize) -> bool {
    match chars.get(i + 1) {
        None => true,
        Some('\n') => true,
        Some(' ') => match chars.get(i + 2) {
            None => true,
            Some(next) => next.is_ascii_uppercase(),
        },
        Some(_) => false,
    }
}

/// Re-locate already-produced segments with a monotonically advancing cursor
fn locate_segments(text: &str, parts: Vec<String>) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut cursor = 0;

    for part in parts {
        let needle: Vec<char> = part.chars().collect();
        if let Some(start) = find_chars(&chars, &needle, cursor) {
            let end = start + needle.len();
            segments.push(Segment {
                text: part,
                start,
                end,
            });
            cursor = end;
        }
        // Not found at or after the cursor: the segment is dropped
    }

    segments
}

/// First occurrence of `needle` in `haystack` at or after `from`, as a
/// char offset.
fn find_chars(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(haystack.len()));
    }
    if from + needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&start| haystack[start..start + needle.len()] == *needle)
}
