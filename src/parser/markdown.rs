//! Markdown structure matcher

use super::MarkupMatcher;
use regex::Regex;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(\S.*)$").expect("Invalid regex: markdown H1"));

static SUBHEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#{2,3}[ \t]+\S").expect("Invalid regex: markdown H2/H3")
});

// A non-blank line followed by a newline, so every line of a multi-line
// paragraph counts.
static PARAGRAPH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\S[^\n]*\n").expect("Invalid regex: markdown paragraph line")
});

static BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*[*-][ \t]+\S").expect("Invalid regex: markdown bullet")
});

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]*\]\([^)\s]+[^)]*\)").expect("Invalid regex: markdown image")
});

/// Matches `#` headings, `* `/`- ` bullets, `![alt](src)` images and
/// line-based paragraphs
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownMatcher;

impl MarkupMatcher for MarkdownMatcher {
    fn title(&self, content: &str) -> Option<String> {
        TITLE
            .captures(content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    fn subheading_count(&self, content: &str) -> usize {
        SUBHEADING.find_iter(content).count()
    }

    fn paragraph_count(&self, content: &str) -> usize {
        PARAGRAPH_LINE.find_iter(content).count()
    }

    fn list_count(&self, content: &str) -> usize {
        BULLET.find_iter(content).count()
    }

    fn image_count(&self, content: &str) -> usize {
        IMAGE.find_iter(content).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_requires_single_hash_and_space() {
        let m = MarkdownMatcher;
        assert_eq!(m.title("# Hello World\n").as_deref(), Some("Hello World"));
        assert_eq!(m.title("intro\n#   Spaced  \n").as_deref(), Some("Spaced"));
        assert_eq!(m.title("## Not a title"), None);
        assert_eq!(m.title("#hashtag"), None);
        assert_eq!(m.title("text # not at line start"), None);
    }

    #[test]
    fn test_subheadings_h2_and_h3_only() {
        let m = MarkdownMatcher;
        assert_eq!(m.subheading_count("## A\n### B\n#### C\n# D\n"), 2);
        assert_eq!(m.subheading_count("##\n"), 0);
    }

    #[test]
    fn test_paragraph_lines_need_trailing_newline() {
        let m = MarkdownMatcher;
        assert_eq!(m.paragraph_count("one line"), 0);
        assert_eq!(m.paragraph_count("one\ntwo\n\nthree"), 2);
        assert_eq!(m.paragraph_count("a\n\n   \nb\n"), 2);
    }

    #[test]
    fn test_bullets() {
        let m = MarkdownMatcher;
        assert_eq!(m.list_count("* one\n- two\n  - nested\n"), 3);
        assert_eq!(m.list_count("---\n**bold**\n-dash\n"), 0);
    }

    #[test]
    fn test_images() {
        let m = MarkdownMatcher;
        assert_eq!(m.image_count("![alt](img.png) and ![](b.jpg \"t\")"), 2);
        assert_eq!(m.image_count("[link](page.html)"), 0);
    }
}
