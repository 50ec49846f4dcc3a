//! Reader engagement - opening hook, questions, calls to action, emotional language

use super::{DimensionAnalyzer, Findings};
use crate::text::PlainText;
use crate::{AnalysisOptions, Dimension, DimensionResult, EngagementMetrics, Metrics};

const CTA_PHRASES: &[&str] = &[
    "click here",
    "learn more",
    "sign up",
    "subscribe",
    "get started",
    "contact us",
    "download",
    "try it",
    "buy now",
    "join us",
    "read more",
    "find out",
    "register",
    "share this",
    "let us know",
];

const EMOTIONAL_WORDS: &[&str] = &[
    "amazing",
    "incredible",
    "awesome",
    "powerful",
    "essential",
    "surprising",
    "remarkable",
    "exciting",
    "ultimate",
    "proven",
    "secret",
    "stunning",
    "love",
    "fear",
    "happy",
    "brilliant",
];

/// Scores how well the content draws the reader in
pub struct EngagementAnalyzer;

impl EngagementAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Text up to the first `.`, `!` or `?`, trimmed
    pub fn first_sentence(text: &str) -> &str {
        let end = text.find(['.', '!', '?']).unwrap_or(text.len());
        text[..end].trim()
    }

    /// First call-to-action phrase found, if any
    pub fn find_call_to_action(lower: &str) -> Option<&'static str> {
        CTA_PHRASES.iter().copied().find(|p| lower.contains(p))
    }

    /// Total occurrences of emotional words (substring matches)
    pub fn count_emotional_words(lower: &str) -> usize {
        EMOTIONAL_WORDS.iter().map(|w| lower.matches(w).count()).sum()
    }
}

impl Default for EngagementAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionAnalyzer for EngagementAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Engagement
    }

    fn analyze(&self, content: &str, _options: &AnalysisOptions) -> DimensionResult {
        let text = PlainText::from_markup(content);
        let lower = text.as_str().to_lowercase();
        let mut findings = Findings::new();

        let opening_length = Self::first_sentence(text.as_str()).chars().count();
        let hook_strength = if (50..=150).contains(&opening_length) {
            20
        } else if opening_length > 30 {
            findings.issue("Opening sentence could be more engaging");
            10
        } else {
            findings.issue("Opening sentence is too short");
            5
        };
        findings.add(hook_strength as f64);

        let question_count = text.as_str().matches('?').count();
        if question_count > 0 {
            findings.add((question_count * 3).min(15) as f64);
        } else {
            findings.issue("Consider adding questions to increase engagement");
        }

        let call_to_action = Self::find_call_to_action(&lower).is_some();
        if call_to_action {
            findings.add(15.0);
        }

        let emotional_words = Self::count_emotional_words(&lower);
        findings.add((emotional_words * 2).min(10) as f64);

        findings.finish(Metrics::Engagement(EngagementMetrics {
            hook_strength,
            question_count,
            call_to_action,
            emotional_words,
        }))
    }
}
