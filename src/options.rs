//! Per-call analysis options

use crate::Dimension;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat set of switches controlling which dimensions run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOptions")]
pub struct AnalysisOptions {
    pub check_readability: bool,
    pub check_seo: bool,
    pub check_structure: bool,
    pub check_keywords: bool,
    pub check_length: bool,
    pub check_engagement: bool,
    /// Accepted for compatibility; originality checking is not performed
    pub check_originality: bool,
    /// Keyword whose density the SEO dimension measures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_keyword: Option<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            check_readability: true,
            check_seo: true,
            check_structure: true,
            check_keywords: true,
            check_length: true,
            check_engagement: true,
            check_originality: false,
            target_keyword: None,
        }
    }
}

impl AnalysisOptions {
    /// Set the SEO target keyword; blank keywords are ignored
    pub fn with_target_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.target_keyword = normalize_keyword(keyword.into());
        self
    }

    /// Disable one dimension
    pub fn without(mut self, dimension: Dimension) -> Self {
        *self.flag_mut(dimension) = false;
        self
    }

    pub fn is_enabled(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Structure => self.check_structure,
            Dimension::Readability => self.check_readability,
            Dimension::Seo => self.check_seo,
            Dimension::Length => self.check_length,
            Dimension::Keywords => self.check_keywords,
            Dimension::Engagement => self.check_engagement,
        }
    }

    /// Enabled dimensions in evaluation order
    pub fn enabled_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.is_enabled(*d))
            .collect()
    }

    fn flag_mut(&mut self, dimension: Dimension) -> &mut bool {
        match dimension {
            Dimension::Structure => &mut self.check_structure,
            Dimension::Readability => &mut self.check_readability,
            Dimension::Seo => &mut self.check_seo,
            Dimension::Length => &mut self.check_length,
            Dimension::Keywords => &mut self.check_keywords,
            Dimension::Engagement => &mut self.check_engagement,
        }
    }
}

fn normalize_keyword(keyword: String) -> Option<String> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Loosely-typed wire form. Values of the wrong JSON type fall back to the default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawOptions {
    check_readability: Option<Value>,
    check_seo: Option<Value>,
    check_structure: Option<Value>,
    check_keywords: Option<Value>,
    check_length: Option<Value>,
    check_engagement: Option<Value>,
    check_originality: Option<Value>,
    target_keyword: Option<Value>,
}

fn flag(value: Option<Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => b,
        _ => default,
    }
}

impl From<RawOptions> for AnalysisOptions {
    fn from(raw: RawOptions) -> Self {
        let defaults = AnalysisOptions::default();
        let target_keyword = match raw.target_keyword {
            Some(Value::String(s)) => normalize_keyword(s),
            Some(Value::Number(n)) => normalize_keyword(n.to_string()),
            _ => None,
        };
        Self {
            check_readability: flag(raw.check_readability, defaults.check_readability),
            check_seo: flag(raw.check_seo, defaults.check_seo),
            check_structure: flag(raw.check_structure, defaults.check_structure),
            check_keywords: flag(raw.check_keywords, defaults.check_keywords),
            check_length: flag(raw.check_length, defaults.check_length),
            check_engagement: flag(raw.check_engagement, defaults.check_engagement),
            check_originality: flag(raw.check_originality, defaults.check_originality),
            target_keyword,
        }
    }
}
