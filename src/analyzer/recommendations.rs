//! Prioritized recommendations derived from dimension issues

use crate::{Dimension, DimensionResult, Priority, Recommendation};
use std::collections::BTreeMap;

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 10;

const HIGH_PRIORITY_MARKERS: &[&str] = &["missing", "no", "too short", "too long"];
const MEDIUM_PRIORITY_MARKERS: &[&str] = &["consider", "should", "may be"];

const GENERIC_SUGGESTION: &str =
    "Review this part of the content and revise it to address the issue.";

const SUGGESTIONS: &[(Dimension, &str, &str)] = &[
    (
        Dimension::Structure,
        "Missing H1 title",
        "Add a clear, descriptive H1 title at the top of the content.",
    ),
    (
        Dimension::Structure,
        "No subheadings found",
        "Break the content into sections with H2 and H3 subheadings.",
    ),
    (
        Dimension::Structure,
        "Consider adding more subheadings",
        "Add at least one more subheading so readers can scan the sections.",
    ),
    (
        Dimension::Structure,
        "Content may be too short or poorly structured",
        "Split the content into at least three focused paragraphs.",
    ),
    (
        Dimension::Structure,
        "Content is too short for a quality article",
        "Expand the article to at least 300 words, ideally 500 to 2000.",
    ),
    (
        Dimension::Readability,
        "Unable to analyze readability",
        "Write complete sentences that end with proper punctuation.",
    ),
    (
        Dimension::Readability,
        "Sentences are too long on average",
        "Shorten sentences to fewer than 25 words on average.",
    ),
    (
        Dimension::Readability,
        "Too many complex words",
        "Replace long, multi-syllable words with simpler alternatives.",
    ),
    (
        Dimension::Seo,
        "No title found",
        "Add a title so search engines can identify the topic.",
    ),
    (
        Dimension::Seo,
        "Title length is not optimal for SEO",
        "Rewrite the title to between 50 and 60 characters.",
    ),
    (
        Dimension::Seo,
        "Title may be too long for search results",
        "Trim the title to 60 characters or fewer so it is not truncated.",
    ),
    (
        Dimension::Seo,
        "Keyword density is not optimal",
        "Use the target keyword so it makes up 1% to 2.5% of the words.",
    ),
    (
        Dimension::Seo,
        "Content should have more subheadings",
        "Add at least two subheadings, ideally including the target keyword.",
    ),
    (
        Dimension::Seo,
        "Consider adding internal links",
        "Link to related pages on your own site.",
    ),
    (
        Dimension::Length,
        "Content is too short for comprehensive coverage",
        "Expand the content toward 800 to 1500 words to cover the topic fully.",
    ),
    (
        Dimension::Length,
        "Paragraphs are too long",
        "Keep paragraphs under 150 words by splitting long ones.",
    ),
    (
        Dimension::Engagement,
        "Opening sentence is too short",
        "Open with a hook of 50 to 150 characters that states why the reader should care.",
    ),
    (
        Dimension::Engagement,
        "Opening sentence could be more engaging",
        "Rework the opening sentence into a 50 to 150 character hook.",
    ),
    (
        Dimension::Engagement,
        "Consider adding questions to increase engagement",
        "Ask the reader a question or two to invite reflection.",
    ),
];

/// Builds the recommendation list from analysis issues
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Priority from keywords in the issue text (case-insensitive). High
    /// markers are checked before medium ones.
    pub fn classify(issue: &str) -> Priority {
        let lower = issue.to_lowercase();
        if HIGH_PRIORITY_MARKERS.iter().any(|m| lower.contains(m)) {
            Priority::High
        } else if MEDIUM_PRIORITY_MARKERS.iter().any(|m| lower.contains(m)) {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Suggestion for an exact (dimension, issue) pair, or the generic fallback
    pub fn suggestion_for(dimension: Dimension, issue: &str) -> &'static str {
        SUGGESTIONS
            .iter()
            .find(|(d, i, _)| *d == dimension && *i == issue)
            .map(|(_, _, s)| *s)
            .unwrap_or(GENERIC_SUGGESTION)
    }

    /// Flatten issues in dimension order, stable-sort by priority, keep the first ten
    pub fn generate(analysis: &BTreeMap<Dimension, DimensionResult>) -> Vec<Recommendation> {
        let mut recs: Vec<Recommendation> = analysis
            .iter()
            .flat_map(|(&dimension, result)| {
                result.issues.iter().map(move |issue| Recommendation {
                    dimension,
                    priority: Self::classify(issue),
                    issue: issue.clone(),
                    suggestion: Self::suggestion_for(dimension, issue).to_string(),
                })
            })
            .collect();
        recs.sort_by_key(|r| r.priority);
        recs.truncate(MAX_RECOMMENDATIONS);
        recs
    }
}
