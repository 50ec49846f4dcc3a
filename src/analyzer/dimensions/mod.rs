//! Dimension analyzers for content quality

pub mod engagement;
pub mod keywords;
pub mod length;
pub mod readability;
pub mod seo;
pub mod structure;

pub use engagement::EngagementAnalyzer;
pub use keywords::KeywordAnalyzer;
pub use length::LengthAnalyzer;
pub use readability::ReadabilityAnalyzer;
pub use seo::SeoAnalyzer;
pub use structure::StructureAnalyzer;

use crate::{AnalysisOptions, Dimension, DimensionResult, Metrics};

/// Trait for dimension analyzers
pub trait DimensionAnalyzer: Send + Sync {
    /// Dimension this analyzer scores
    fn dimension(&self) -> Dimension;

    /// Score the content. Must be total over every string, including "".
    fn analyze(&self, content: &str, options: &AnalysisOptions) -> DimensionResult;
}

/// The six analyzers, in evaluation order
pub fn all_analyzers() -> Vec<Box<dyn DimensionAnalyzer>> {
    vec![
        Box::new(StructureAnalyzer::new()),
        Box::new(ReadabilityAnalyzer::new()),
        Box::new(SeoAnalyzer::new()),
        Box::new(LengthAnalyzer::new()),
        Box::new(KeywordAnalyzer::new()),
        Box::new(EngagementAnalyzer::new()),
    ]
}

/// Running score and issue list for one analyzer
#[derive(Debug, Default)]
pub(crate) struct Findings {
    score: f64,
    issues: Vec<String>,
}

impl Findings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, points: f64) {
        self.score += points;
    }

    pub(crate) fn set(&mut self, points: f64) {
        self.score = points;
    }

    /// Record an issue; repeats of the same text are dropped
    pub(crate) fn issue(&mut self, message: &str) {
        if !self.issues.iter().any(|i| i == message) {
            self.issues.push(message.to_string());
        }
    }

    /// Subtract `points` and record the issue that caused it
    pub(crate) fn penalize(&mut self, points: f64, message: &str) {
        self.score -= points;
        self.issue(message);
    }

    pub(crate) fn finish(self, metrics: Metrics) -> DimensionResult {
        DimensionResult {
            score: self.score,
            issues: self.issues,
            metrics,
        }
    }
}
