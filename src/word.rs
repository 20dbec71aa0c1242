//! Word tokens and whole-word matching.
//!
//! A word is a maximal run of ASCII word characters (`A-Z`, `a-z`, `0-9`,
//! `_`), bounded by non-word characters or the edges of the string. Any
//! other character, accented letters included, separates words. All offsets
//! in and out of this module are character offsets.

use regex::Regex;
use std::sync::OnceLock;

use crate::position::WordSpan;

// ASCII-only boundary, so `\b` agrees with the word class below
const BOUNDARY: &str = r"(?-u:\b)";

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_RE.get_or_init(|| {
        Regex::new(&format!("{BOUNDARY}[0-9A-Za-z_]+{BOUNDARY}")).expect("word pattern is valid")
    })
}

/// Convert a byte index into a character index.
pub fn char_offset(s: &str, byte_idx: usize) -> usize {
    let byte_idx = byte_idx.min(s.len());
    s[..byte_idx].chars().count()
}

/// Convert a character index into a byte index, clamped to the string length.
pub fn byte_offset(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    match s.char_indices().nth(char_idx) {
        Some((b, _)) => b,
        None => s.len(),
    }
}

fn span_of(s: &str, start_byte: usize, end_byte: usize) -> WordSpan {
    let start = char_offset(s, start_byte);
    WordSpan::new(start, start + s[start_byte..end_byte].chars().count())
}

/// Find the word token containing `offset` in `line`.
///
/// Tokens are visited left to right and the first one with
/// `start <= offset < end` wins. An offset that only touches a token's end
/// is not inside it.
pub fn word_range_at(line: &str, offset: usize) -> Option<WordSpan> {
    word_pattern()
        .find_iter(line)
        .map(|m| span_of(line, m.start(), m.end()))
        .find(|span| span.contains(offset))
}

/// The text of the word containing `offset`, if any.
pub fn word_at(line: &str, offset: usize) -> Option<&str> {
    let span = word_range_at(line, offset)?;
    Some(&line[byte_offset(line, span.start)..byte_offset(line, span.end)])
}

/// Matches one literal word, only where it is flanked by word boundaries.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Regex,
}

impl WordMatcher {
    /// Build a matcher for `word`. Returns `None` for an empty word, which
    /// would otherwise match at every boundary.
    pub fn new(word: &str) -> Option<Self> {
        if word.is_empty() {
            return None;
        }
        let pattern = format!("{BOUNDARY}{}{BOUNDARY}", regex::escape(word));
        let regex = Regex::new(&pattern).ok()?;
        Some(Self { regex })
    }

    /// All non-overlapping whole-word matches in `haystack`, in reading order.
    /// The haystack's own edges count as word boundaries.
    pub fn find_all(&self, haystack: &str) -> Vec<WordSpan> {
        self.regex
            .find_iter(haystack)
            .map(|m| span_of(haystack, m.start(), m.end()))
            .collect()
    }

    pub fn first(&self, haystack: &str) -> Option<WordSpan> {
        self.regex
            .find(haystack)
            .map(|m| span_of(haystack, m.start(), m.end()))
    }

    pub fn last(&self, haystack: &str) -> Option<WordSpan> {
        self.find_all(haystack).pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_word_inside_first_token() {
        assert_eq!(word_range_at("foo bar foo", 1), Some(WordSpan::new(0, 3)));
    }

    #[test]
    fn test_word_at_token_start() {
        assert_eq!(word_range_at("foo bar foo", 4), Some(WordSpan::new(4, 7)));
        assert_eq!(word_range_at("foo bar foo", 8), Some(WordSpan::new(8, 11)));
    }

    #[test]
    fn test_whitespace_has_no_word() {
        assert_eq!(word_range_at("foo bar", 3), None);
    }

    #[test]
    fn test_offset_at_line_end_has_no_word() {
        assert_eq!(word_range_at("foo", 3), None);
        assert_eq!(word_range_at("", 0), None);
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(word_range_at("a.b_c(d)", 3), Some(WordSpan::new(2, 5)));
        assert_eq!(word_range_at("a.b_c(d)", 5), None);
        assert_eq!(word_at("self.value = 42", 7), Some("value"));
        assert_eq!(word_at("self.value = 42", 13), Some("42"));
    }

    #[test]
    fn test_offsets_count_characters() {
        // 'é' is two bytes but one character
        assert_eq!(word_range_at("é foo", 3), Some(WordSpan::new(2, 5)));
        assert_eq!(word_at("déjà vu", 5), Some("vu"));
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        assert_eq!(word_range_at("déjà vu", 0), Some(WordSpan::new(0, 1)));
        assert_eq!(word_range_at("déjà vu", 1), None);
        assert_eq!(word_at("déjà vu", 2), Some("j"));
        assert_eq!(word_at("naïve", 3), Some("ve"));
    }

    #[test]
    fn test_whole_word_after_non_ascii_letter() {
        let matcher = WordMatcher::new("foo").unwrap();
        assert_eq!(
            matcher.find_all("éfoo fooé foo"),
            vec![WordSpan::new(1, 4), WordSpan::new(5, 8), WordSpan::new(10, 13)]
        );
    }

    #[test]
    fn test_whole_word_skips_embedded_occurrences() {
        let matcher = WordMatcher::new("foo").unwrap();
        let matches = matcher.find_all("food foo _foo foo1 foo");
        assert_eq!(matches, vec![WordSpan::new(5, 8), WordSpan::new(19, 22)]);
    }

    #[test]
    fn test_haystack_edges_are_boundaries() {
        let matcher = WordMatcher::new("foo").unwrap();
        let line = "foobar";
        assert!(matcher.find_all(line).is_empty());
        assert_eq!(matcher.find_all(&line[..3]), vec![WordSpan::new(0, 3)]);
    }

    #[test]
    fn test_empty_word_never_matches() {
        assert!(WordMatcher::new("").is_none());
    }

    #[test]
    fn test_first_and_last() {
        let matcher = WordMatcher::new("x").unwrap();
        assert_eq!(matcher.first("x + x * x"), Some(WordSpan::new(0, 1)));
        assert_eq!(matcher.last("x + x * x"), Some(WordSpan::new(8, 9)));
        assert_eq!(matcher.first("xx"), None);
    }

    #[test]
    fn test_byte_and_char_offsets() {
        let s = "aé b";
        assert_eq!(byte_offset(s, 2), 3);
        assert_eq!(char_offset(s, 3), 2);
        assert_eq!(byte_offset(s, 99), s.len());
        assert_eq!(char_offset(s, 99), 4);
    }

    proptest! {
        #[test]
        fn prop_offset_inside_token_returns_token(
            words in prop::collection::vec("[a-z0-9_]{1,6}", 1..6),
            pick in 0usize..6,
            inner in 0usize..6,
        ) {
            let line = words.join(" ");
            let idx = pick % words.len();
            let start: usize = words[..idx].iter().map(|w| w.len() + 1).sum();
            let end = start + words[idx].len();
            let offset = start + inner % words[idx].len();
            prop_assert_eq!(word_range_at(&line, offset), Some(WordSpan::new(start, end)));
        }

        #[test]
        fn prop_non_word_offset_returns_none(line in "[a-z ,.;()]{0,30}", offset in 0usize..30) {
            let on_word = line
                .chars()
                .nth(offset)
                .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_');
            if !on_word {
                prop_assert_eq!(word_range_at(&line, offset), None);
            }
        }
    }
}
