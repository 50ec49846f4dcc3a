//! Contentgrade: Content Quality Analyzer
//!
//! This library scores Markdown or HTML articles across six independent
//! dimensions (structure, readability, SEO, length, keywords, engagement) and
//! combines them into a weighted score, a letter grade and a prioritized list
//! of recommendations.

pub mod analyzer;
pub mod config;
pub mod logging;
pub mod options;
pub mod parser;
pub mod reporter;
pub mod text;

pub use options::AnalysisOptions;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The result of analyzing one piece of content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// File the content was read from (CLI only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Weighted score, at most 100
    pub overall_score: f64,
    /// Letter grade for `overall_score`
    pub grade: Grade,
    /// Per-dimension results, in evaluation order
    pub analysis: BTreeMap<Dimension, DimensionResult>,
    /// Weight and contribution of every enabled dimension
    pub breakdown: Vec<DimensionBreakdown>,
    /// At most ten recommendations, most urgent first
    pub recommendations: Vec<Recommendation>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Result for a single dimension, if it was enabled
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionResult> {
        self.analysis.get(&dimension)
    }
}

/// Public API: analyze one piece of content with the given options.
///
/// Never fails: empty or unstructured content produces degenerate dimension
/// results instead of an error.
pub fn analyze_content(content: &str, options: &AnalysisOptions) -> AnalysisResult {
    analyzer::ContentAnalyzer::new().analyze(content, options)
}

/// Scoring dimensions, declared in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Structure,
    Readability,
    Seo,
    Length,
    Keywords,
    Engagement,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Structure,
        Dimension::Readability,
        Dimension::Seo,
        Dimension::Length,
        Dimension::Keywords,
        Dimension::Engagement,
    ];

    /// Fixed contribution of this dimension to the overall score (weights sum to 1)
    pub fn weight(self) -> f64 {
        match self {
            Dimension::Structure => 0.25,
            Dimension::Readability => 0.20,
            Dimension::Seo => 0.20,
            Dimension::Length => 0.15,
            Dimension::Keywords => 0.10,
            Dimension::Engagement => 0.10,
        }
    }

    /// Highest raw score this dimension's analyzer can award
    pub fn max_score(self) -> f64 {
        match self {
            Dimension::Structure => 85.0,
            Dimension::Readability => 40.0,
            Dimension::Seo => 70.0,
            Dimension::Length => 50.0,
            Dimension::Keywords => 20.0,
            Dimension::Engagement => 60.0,
        }
    }

    /// Machine name, as used in JSON output and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Structure => "structure",
            Dimension::Readability => "readability",
            Dimension::Seo => "seo",
            Dimension::Length => "length",
            Dimension::Keywords => "keywords",
            Dimension::Engagement => "engagement",
        }
    }

    /// Human-readable label for console output
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Structure => "Structure",
            Dimension::Readability => "Readability",
            Dimension::Seo => "SEO",
            Dimension::Length => "Length",
            Dimension::Keywords => "Keywords",
            Dimension::Engagement => "Engagement",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown dimension '{}' (expected one of: structure, readability, seo, length, keywords, engagement)",
                    s
                )
            })
    }
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::APlus
        } else if score >= 80.0 {
            Grade::A
        } else if score >= 70.0 {
            Grade::BPlus
        } else if score >= 60.0 {
            Grade::B
        } else if score >= 50.0 {
            Grade::CPlus
        } else if score >= 40.0 {
            Grade::C
        } else {
            Grade::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::APlus => write!(f, "A+"),
            Grade::A => write!(f, "A"),
            Grade::BPlus => write!(f, "B+"),
            Grade::B => write!(f, "B"),
            Grade::CPlus => write!(f, "C+"),
            Grade::C => write!(f, "C"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Outcome of one dimension analyzer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionResult {
    /// Raw points before weighting; may be negative
    pub score: f64,
    /// Diagnostics in detection order, each at most once
    pub issues: Vec<String>,
    /// Dimension-specific measurements
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Dimension-specific measurements, flattened into the JSON of [`DimensionResult`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Metrics {
    Structure(StructureMetrics),
    Readability(ReadabilityMetrics),
    Seo(SeoMetrics),
    Length(LengthMetrics),
    Keywords(KeywordMetrics),
    Engagement(EngagementMetrics),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructureMetrics {
    pub has_title: bool,
    pub has_subheadings: bool,
    pub has_paragraphs: bool,
    pub has_lists: bool,
    pub has_images: bool,
    pub subheading_count: usize,
    pub paragraph_count: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReadabilityMetrics {
    pub sentence_count: usize,
    pub word_count: usize,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub complex_words: usize,
    pub syllable_count: usize,
    pub flesch_score: f64,
    pub grade_level: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeoMetrics {
    pub title: Option<String>,
    pub title_length: usize,
    /// Percentage of words matching the target keyword (only with a keyword)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_density: Option<f64>,
    pub header_count: usize,
    pub internal_links: usize,
    pub external_links: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LengthMetrics {
    pub word_count: usize,
    pub character_count: usize,
    pub paragraph_count: usize,
    pub avg_paragraph_length: f64,
    pub ideal_range: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordMetrics {
    /// Most frequent non-stop-words, most frequent first
    pub primary_keywords: Vec<KeywordCount>,
    pub unique_words: usize,
    pub keyword_distribution: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EngagementMetrics {
    pub hook_strength: u32,
    pub question_count: usize,
    pub call_to_action: bool,
    pub emotional_words: usize,
}

/// Per-dimension entry of the score breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionBreakdown {
    pub dimension: Dimension,
    /// Raw dimension score
    pub raw_score: f64,
    pub weight: f64,
    /// `raw_score * weight`
    pub weighted_contribution: f64,
}

/// Recommendation priority; declaration order is rank order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// An actionable suggestion derived from a dimension issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub dimension: Dimension,
    pub priority: Priority,
    pub issue: String,
    pub suggestion: String,
}
