//! Structural markup detection for Markdown and HTML content
//!
//! Each dialect has its own matcher; [`MarkupFeatures::detect`] runs both and
//! combines their counts per feature so mixed documents are handled.

pub mod html;
pub mod markdown;

pub use html::HtmlMatcher;
pub use markdown::MarkdownMatcher;

use crate::text::PlainText;

/// Structural features one markup dialect can report
pub trait MarkupMatcher {
    /// Text of the first top-level (H1-equivalent) heading
    fn title(&self, content: &str) -> Option<String>;

    /// Number of H2/H3-equivalent headings
    fn subheading_count(&self, content: &str) -> usize;

    /// Number of paragraph markers
    fn paragraph_count(&self, content: &str) -> usize;

    /// Number of list markers (bullet lines or list elements)
    fn list_count(&self, content: &str) -> usize;

    fn image_count(&self, content: &str) -> usize;

    /// Internal and external link counts
    fn link_counts(&self, _content: &str) -> LinkCounts {
        LinkCounts::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

/// Combined view of both matchers over one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupFeatures {
    /// HTML `<h1>` text if present, otherwise the Markdown `# ` heading
    pub title: Option<String>,
    pub subheadings: usize,
    pub paragraphs: usize,
    pub lists: usize,
    pub images: usize,
    pub links: LinkCounts,
}

impl MarkupFeatures {
    /// Run both matchers. Headings, lists, images and links use disjoint
    /// syntax and are summed. The Markdown paragraph heuristic also matches
    /// lines holding HTML paragraphs, so paragraphs take the larger count.
    pub fn detect(content: &str) -> Self {
        let html = HtmlMatcher;
        let markdown = MarkdownMatcher;

        let html_links = html.link_counts(content);
        let md_links = markdown.link_counts(content);

        let features = Self {
            title: html.title(content).or_else(|| markdown.title(content)),
            subheadings: html.subheading_count(content) + markdown.subheading_count(content),
            paragraphs: html
                .paragraph_count(content)
                .max(markdown.paragraph_count(content)),
            lists: html.list_count(content) + markdown.list_count(content),
            images: html.image_count(content) + markdown.image_count(content),
            links: LinkCounts {
                internal: html_links.internal + md_links.internal,
                external: html_links.external + md_links.external,
            },
        };
        tracing::trace!(?features, "markup features detected");
        features
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }
}

/// Inner text of a matched element, tags removed and whitespace collapsed
pub(crate) fn element_text(inner: &str) -> String {
    PlainText::from_markup(inner).words().join(" ")
}
