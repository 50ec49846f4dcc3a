//! Content length and paragraph sizing

use super::{DimensionAnalyzer, Findings};
use crate::text::{round_to, PlainText};
use crate::{AnalysisOptions, Dimension, DimensionResult, LengthMetrics, Metrics};

const MAX_AVG_PARAGRAPH_WORDS: f64 = 150.0;

/// Scores whether the content is long enough for comprehensive coverage
pub struct LengthAnalyzer;

impl LengthAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LengthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionAnalyzer for LengthAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Length
    }

    fn analyze(&self, content: &str, _options: &AnalysisOptions) -> DimensionResult {
        let text = PlainText::from_markup(content);
        let word_count = text.word_count();
        let paragraph_count = text.paragraphs().len();
        let mut findings = Findings::new();
        let mut ideal_range = false;

        if (800..=1500).contains(&word_count) {
            ideal_range = true;
            findings.set(40.0);
        } else if word_count >= 600 {
            findings.set(30.0);
        } else if word_count >= 400 {
            findings.set(20.0);
        } else {
            findings.set(10.0);
            findings.issue("Content is too short for comprehensive coverage");
        }

        let mut avg_paragraph_length = 0.0;
        if paragraph_count > 0 {
            avg_paragraph_length = word_count as f64 / paragraph_count as f64;
            if avg_paragraph_length <= MAX_AVG_PARAGRAPH_WORDS {
                findings.add(10.0);
            } else {
                findings.penalize(5.0, "Paragraphs are too long");
            }
        }

        findings.finish(Metrics::Length(LengthMetrics {
            word_count,
            character_count: text.char_count(),
            paragraph_count,
            avg_paragraph_length: round_to(avg_paragraph_length, 1),
            ideal_range,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(content: &str) -> (DimensionResult, LengthMetrics) {
        let result = LengthAnalyzer::new().analyze(content, &AnalysisOptions::default());
        let Metrics::Length(m) = result.metrics.clone() else {
            panic!("length analyzer returned foreign metrics");
        };
        (result, m)
    }

    fn paragraphs(count: usize, words_each: usize) -> String {
        vec![vec!["word"; words_each].join(" "); count].join("\n\n")
    }

    #[test]
    fn test_ideal_length_with_short_paragraphs() {
        let (r, m) = analyze(&paragraphs(10, 100));
        assert_eq!(m.word_count, 1000);
        assert_eq!(m.paragraph_count, 10);
        assert!(m.ideal_range);
        assert_eq!(r.score, 50.0);
        assert!(r.issues.is_empty());
    }

    #[test]
    fn test_long_paragraphs_penalized() {
        let (r, m) = analyze(&paragraphs(2, 500));
        assert!(m.ideal_range);
        assert_eq!(m.avg_paragraph_length, 500.0);
        assert_eq!(r.score, 35.0);
        assert_eq!(r.issues, vec!["Paragraphs are too long"]);
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(analyze(&paragraphs(7, 100)).0.score, 40.0);
        assert_eq!(analyze(&paragraphs(5, 100)).0.score, 30.0);
        let (r, m) = analyze(&paragraphs(20, 100));
        assert!(!m.ideal_range);
        assert_eq!(r.score, 40.0);
    }

    #[test]
    fn test_short_content() {
        let (r, m) = analyze("");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.paragraph_count, 0);
        assert_eq!(r.score, 10.0);
        assert_eq!(r.issues, vec!["Content is too short for comprehensive coverage"]);
    }

    #[test]
    fn test_character_count_excludes_tags() {
        let (_, m) = analyze("<p>abc</p>");
        assert_eq!(m.character_count, 3);
        let (_, m) = analyze("<p>one</p><p>two</p>");
        assert_eq!(m.character_count, 6);
        assert_eq!(m.word_count, 2);
    }
}
