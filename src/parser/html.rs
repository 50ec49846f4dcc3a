//! HTML structure matcher

use super::{element_text, LinkCounts, MarkupMatcher};
use regex::Regex;
use std::sync::LazyLock;

static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").expect("Invalid regex: <h1>"));

static SUBHEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h[23]\b[^>]*>.*?</h[23]\s*>").expect("Invalid regex: <h2>/<h3>")
});

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p\b[^>]*>").expect("Invalid regex: <p>"));

static LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:ul|ol)\b[^>]*>").expect("Invalid regex: <ul>/<ol>"));

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b").expect("Invalid regex: <img>"));

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*["']([^"']*)["']"#).expect("Invalid regex: <a href>")
});

/// Matches `<h1>`-`<h3>`, `<p>`, `<ul>/<ol>`, `<img>` and `<a href>` elements
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMatcher;

/// Where a link target points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Site-relative path such as `/docs`
    Internal,
    /// Absolute `http://` or `https://` URL
    External,
    /// Fragments, protocol-relative URLs, `mailto:` and relative paths
    Other,
}

pub fn classify_href(href: &str) -> LinkTarget {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        LinkTarget::External
    } else if href.starts_with('/') && !href.starts_with("//") {
        LinkTarget::Internal
    } else {
        LinkTarget::Other
    }
}

impl MarkupMatcher for HtmlMatcher {
    fn title(&self, content: &str) -> Option<String> {
        H1.captures(content)
            .and_then(|c| c.get(1))
            .map(|m| element_text(m.as_str()))
    }

    fn subheading_count(&self, content: &str) -> usize {
        SUBHEADING.find_iter(content).count()
    }

    fn paragraph_count(&self, content: &str) -> usize {
        PARAGRAPH.find_iter(content).count()
    }

    fn list_count(&self, content: &str) -> usize {
        LIST.find_iter(content).count()
    }

    fn image_count(&self, content: &str) -> usize {
        IMAGE.find_iter(content).count()
    }

    fn link_counts(&self, content: &str) -> LinkCounts {
        let mut counts = LinkCounts::default();
        for caps in ANCHOR_HREF.captures_iter(content) {
            match caps.get(1).map(|m| classify_href(m.as_str())) {
                Some(LinkTarget::Internal) => counts.internal += 1,
                Some(LinkTarget::External) => counts.external += 1,
                _ => {}
            }
        }
        counts
    }
}
