//! Readability - Flesch reading ease, grade level, sentence and word complexity

use super::{DimensionAnalyzer, Findings};
use crate::text::{count_complex_words, count_syllables, round_to, PlainText};
use crate::{AnalysisOptions, Dimension, DimensionResult, Metrics, ReadabilityMetrics};

const MAX_AVG_SENTENCE_LENGTH: f64 = 25.0;
const MAX_COMPLEX_WORD_RATIO: f64 = 0.30;

/// Scores how easy the content is to read
pub struct ReadabilityAnalyzer;

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Flesch reading ease, higher is easier
    pub fn flesch_reading_ease(words: f64, sentences: f64, syllables: f64) -> f64 {
        206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
    }

    /// Flesch-Kincaid grade level
    pub fn grade_level(words: f64, sentences: f64, syllables: f64) -> f64 {
        0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
    }

    fn band(flesch: f64) -> f64 {
        if flesch >= 60.0 {
            40.0
        } else if flesch >= 30.0 {
            30.0
        } else if flesch >= 0.0 {
            20.0
        } else {
            10.0
        }
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionAnalyzer for ReadabilityAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Readability
    }

    fn analyze(&self, content: &str, _options: &AnalysisOptions) -> DimensionResult {
        let text = PlainText::from_markup(content);
        let sentences = text.sentences();
        let words = text.words();
        let mut findings = Findings::new();

        if sentences.is_empty() || words.is_empty() {
            findings.issue("Unable to analyze readability");
            return findings.finish(Metrics::Readability(ReadabilityMetrics {
                sentence_count: sentences.len(),
                word_count: words.len(),
                ..ReadabilityMetrics::default()
            }));
        }

        let word_count = words.len() as f64;
        let sentence_count = sentences.len() as f64;
        let chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let complex_words = count_complex_words(&words);
        let syllable_count = count_syllables(&text.as_str().to_lowercase());

        let avg_sentence_length = word_count / sentence_count;
        let flesch = round_to(
            Self::flesch_reading_ease(word_count, sentence_count, syllable_count as f64),
            1,
        );
        let grade_level = round_to(
            Self::grade_level(word_count, sentence_count, syllable_count as f64),
            1,
        );

        if syllable_count > 0 {
            findings.set(Self::band(flesch));
        }

        if avg_sentence_length > MAX_AVG_SENTENCE_LENGTH {
            findings.penalize(5.0, "Sentences are too long on average");
        }
        if complex_words as f64 > word_count * MAX_COMPLEX_WORD_RATIO {
            findings.penalize(5.0, "Too many complex words");
        }

        tracing::trace!(flesch, grade_level, syllable_count, "readability computed");

        findings.finish(Metrics::Readability(ReadabilityMetrics {
            sentence_count: sentences.len(),
            word_count: words.len(),
            avg_sentence_length: round_to(avg_sentence_length, 1),
            avg_word_length: round_to(chars as f64 / word_count, 1),
            complex_words,
            syllable_count,
            flesch_score: flesch,
            grade_level,
        }))
    }
}
