//! Text metrics: markup stripping, tokenizing, sentence splitting and syllable heuristics

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex: markup tag"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid regex: sentence terminator"));

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("Invalid regex: blank line"));

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Markup-stripped view of a piece of content
#[derive(Debug, Clone)]
pub struct PlainText {
    text: String,
    /// Characters left once tags are removed outright
    visible_chars: usize,
}

impl PlainText {
    /// Remove every `<...>` tag. Tags become a single space so adjacent
    /// elements do not fuse into one word.
    pub fn from_markup(content: &str) -> Self {
        Self {
            text: TAG.replace_all(content, " ").into_owned(),
            visible_chars: TAG.replace_all(content, "").chars().count(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace-delimited tokens, never empty
    pub fn words(&self) -> Vec<&str> {
        tokenize(&self.text)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Characters of the content with tags removed (no separator spaces)
    pub fn char_count(&self) -> usize {
        self.visible_chars
    }

    pub fn sentences(&self) -> Vec<&str> {
        split_sentences(&self.text)
    }

    /// Blank-line-delimited blocks that contain something other than whitespace
    pub fn paragraphs(&self) -> Vec<&str> {
        BLANK_LINE
            .split(&self.text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

/// Split on runs of whitespace, discarding empty tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split on runs of `.`, `!` and `?`; fragments are trimmed and empties dropped
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Count vowel groups: each run of vowels that starts the string or follows a
/// non-vowel is one syllable. Non-empty input always has at least one.
pub fn count_syllables(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut prev_vowel = false;
    for c in text.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    count.max(1)
}

/// Longer than six characters with three or more syllables
pub fn is_complex_word(word: &str) -> bool {
    word.chars().count() > 6 && count_syllables(word) >= 3
}

pub fn count_complex_words(words: &[&str]) -> usize {
    words.iter().filter(|w| is_complex_word(w)).count()
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables_vowel_groups() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("happy"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        // "e" at the end still counts: no silent-e rule
        assert_eq!(count_syllables("make"), 2);
        assert_eq!(count_syllables("queue"), 1);
    }

    #[test]
    fn test_syllables_minimum_one() {
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("b"), 1);
        assert_eq!(count_syllables("123"), 1);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn test_syllables_across_words() {
        // "the" (1) + "quiet" (1: 'uie' is one run) + "dog" (1)
        assert_eq!(count_syllables("the quiet dog"), 3);
        assert_eq!(count_syllables("Area"), 2);
    }

    #[test]
    fn test_complex_words() {
        assert!(is_complex_word("beautiful"));
        assert!(is_complex_word("organization"));
        assert!(!is_complex_word("banana")); // six chars only
        assert!(!is_complex_word("strengths")); // one syllable
        assert_eq!(count_complex_words(&["beautiful", "cat", "education"]), 2);
    }

    #[test]
    fn test_strip_markup_and_tokenize() {
        let text = PlainText::from_markup("<h1>Hello</h1><p>big   world</p>");
        assert_eq!(text.words(), vec!["Hello", "big", "world"]);
        assert_eq!(text.word_count(), 3);
    }

    #[test]
    fn test_char_count_ignores_tags() {
        assert_eq!(PlainText::from_markup("<p>abc</p>").char_count(), 3);
        assert_eq!(PlainText::from_markup("<b>a</b> <i>b</i>").char_count(), 3);
        assert_eq!(PlainText::from_markup("plain é").char_count(), 7);
    }

    #[test]
    fn test_tokenize_discards_empty() {
        assert!(tokenize("   \n\t ").is_empty());
        assert_eq!(tokenize(" a  b\nc "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("One. Two!! Three?! ... "),
            vec!["One", "Two", "Three"]
        );
        assert!(split_sentences("...").is_empty());
        assert_eq!(split_sentences("no terminator"), vec!["no terminator"]);
    }

    #[test]
    fn test_paragraphs() {
        let text = PlainText::from_markup("first\nstill first\n\n  \n\nsecond\n \nthird");
        assert_eq!(text.paragraphs().len(), 3);
        assert!(PlainText::from_markup("").paragraphs().is_empty());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
        assert_eq!(round_to(-4.44, 1), -4.4);
    }
}
