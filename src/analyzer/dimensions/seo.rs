//! SEO - title length, target keyword density, header structure, links

use super::{DimensionAnalyzer, Findings};
use crate::parser::MarkupFeatures;
use crate::text::{round_to, PlainText};
use crate::{AnalysisOptions, Dimension, DimensionResult, Metrics, SeoMetrics};

/// Scores search-engine friendliness
pub struct SeoAnalyzer;

impl SeoAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive substring occurrences of `keyword` per 100 words, 2 decimals
    pub fn keyword_density(text: &PlainText, keyword: &str) -> f64 {
        let word_count = text.word_count();
        let keyword = keyword.to_lowercase();
        if word_count == 0 || keyword.is_empty() {
            return 0.0;
        }
        let occurrences = text.as_str().to_lowercase().matches(&keyword).count();
        round_to(occurrences as f64 / word_count as f64 * 100.0, 2)
    }

    fn score_title(findings: &mut Findings, title: Option<&str>) -> usize {
        let Some(title) = title else {
            findings.issue("No title found");
            return 0;
        };
        let length = title.chars().count();
        if (50..=60).contains(&length) {
            findings.add(20.0);
        } else if (30..=70).contains(&length) {
            findings.add(15.0);
            if length > 60 {
                findings.issue("Title may be too long for search results");
            }
        } else {
            findings.issue("Title length is not optimal for SEO");
        }
        length
    }
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionAnalyzer for SeoAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Seo
    }

    fn analyze(&self, content: &str, options: &AnalysisOptions) -> DimensionResult {
        let features = MarkupFeatures::detect(content);
        let mut findings = Findings::new();

        let title_length = Self::score_title(&mut findings, features.title.as_deref());

        let keyword_density = options.target_keyword.as_deref().map(|keyword| {
            let density = Self::keyword_density(&PlainText::from_markup(content), keyword);
            if (1.0..=2.5).contains(&density) {
                findings.add(20.0);
            } else if (0.5..=3.0).contains(&density) {
                findings.add(15.0);
            } else {
                findings.issue("Keyword density is not optimal");
            }
            density
        });

        if features.subheadings >= 2 {
            findings.add(15.0);
        } else {
            findings.issue("Content should have more subheadings");
        }

        if features.links.internal > 0 {
            findings.add(10.0);
        } else {
            findings.issue("Consider adding internal links");
        }
        if features.links.external > 0 {
            findings.add(5.0);
        }

        findings.finish(Metrics::Seo(SeoMetrics {
            title: features.title,
            title_length,
            keyword_density,
            header_count: features.subheadings,
            internal_links: features.links.internal,
            external_links: features.links.external,
        }))
    }
}
