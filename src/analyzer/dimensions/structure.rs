//! Document structure - title, subheadings, paragraphs, lists, images, length

use super::{DimensionAnalyzer, Findings};
use crate::parser::MarkupFeatures;
use crate::text::PlainText;
use crate::{AnalysisOptions, Dimension, DimensionResult, Metrics, StructureMetrics};

/// Scores how well the content is organized
pub struct StructureAnalyzer;

impl StructureAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionAnalyzer for StructureAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Structure
    }

    fn analyze(&self, content: &str, _options: &AnalysisOptions) -> DimensionResult {
        let features = MarkupFeatures::detect(content);
        let word_count = PlainText::from_markup(content).word_count();
        let mut findings = Findings::new();
        let mut metrics = StructureMetrics {
            subheading_count: features.subheadings,
            paragraph_count: features.paragraphs,
            word_count,
            ..StructureMetrics::default()
        };

        if features.has_title() {
            metrics.has_title = true;
            findings.add(15.0);
        } else {
            findings.issue("Missing H1 title");
        }

        match features.subheadings {
            0 => findings.issue("No subheadings found"),
            1 => {
                findings.add(10.0);
                findings.issue("Consider adding more subheadings");
            }
            _ => {
                metrics.has_subheadings = true;
                findings.add(20.0);
            }
        }

        if features.paragraphs >= 3 {
            metrics.has_paragraphs = true;
            findings.add(15.0);
        } else {
            findings.issue("Content may be too short or poorly structured");
        }

        if features.lists > 0 {
            metrics.has_lists = true;
            findings.add(10.0);
        }

        if (500..=2000).contains(&word_count) {
            findings.add(15.0);
        } else if word_count >= 300 {
            findings.add(10.0);
        } else {
            findings.issue("Content is too short for a quality article");
        }

        if features.images > 0 {
            metrics.has_images = true;
            findings.add(10.0);
        }

        findings.finish(Metrics::Structure(metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(content: &str) -> (DimensionResult, StructureMetrics) {
        let result = StructureAnalyzer::new().analyze(content, &AnalysisOptions::default());
        let Metrics::Structure(m) = result.metrics.clone() else {
            panic!("structure analyzer returned foreign metrics");
        };
        (result, m)
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_hello_world_scenario() {
        let (r, m) = analyze(
            "# Hello World\n\nThis is a test paragraph with some words in it to check length analysis behavior properly.",
        );
        assert!(m.has_title);
        assert!(r.issues.contains(&"No subheadings found".to_string()));
        // Only "# Hello World\n" is a line followed by a newline
        assert_eq!(m.paragraph_count, 1);
        assert!(r
            .issues
            .contains(&"Content may be too short or poorly structured".to_string()));
        assert_eq!(r.score, 15.0);
    }

    #[test]
    fn test_empty_content() {
        let (r, m) = analyze("");
        assert_eq!(m.word_count, 0);
        assert_eq!(r.score, 0.0);
        assert_eq!(
            r.issues,
            vec![
                "Missing H1 title",
                "No subheadings found",
                "Content may be too short or poorly structured",
                "Content is too short for a quality article",
            ]
        );
    }

    #[test]
    fn test_adding_title_adds_exactly_fifteen() {
        let body = format!("## One\n\n{}\n\n## Two\n\n{}\n", words(200), words(200));
        let (without, _) = analyze(&body);
        let (with, _) = analyze(&format!("# Title\n{}", body));
        assert_eq!(with.score - without.score, 15.0);
        assert!(without.issues.contains(&"Missing H1 title".to_string()));
        assert!(!with.issues.contains(&"Missing H1 title".to_string()));
    }

    #[test]
    fn test_single_subheading() {
        let (r, m) = analyze("## Only one\n");
        assert!(!m.has_subheadings);
        assert_eq!(m.subheading_count, 1);
        assert!(r
            .issues
            .contains(&"Consider adding more subheadings".to_string()));
    }

    #[test]
    fn test_full_marks() {
        let content = format!(
            "<h1>Title</h1>\n<h2>A</h2>\n<p>{}</p>\n<h3>B</h3>\n<p>{}</p>\n<p>{}</p>\n<ul><li>x</li></ul>\n<img src=\"a.png\">\n",
            words(200),
            words(200),
            words(200)
        );
        let (r, m) = analyze(&content);
        assert!(m.has_title && m.has_subheadings && m.has_paragraphs && m.has_lists && m.has_images);
        assert!(r.issues.is_empty(), "{:?}", r.issues);
        assert_eq!(r.score, 85.0);
    }

    #[test]
    fn test_word_count_bands() {
        let (r, _) = analyze(&words(300));
        assert!(!r
            .issues
            .contains(&"Content is too short for a quality article".to_string()));
        let (r2, _) = analyze(&words(2500));
        // above the ideal band still earns the >= 300 credit
        assert_eq!(r.score, r2.score);
    }
}
