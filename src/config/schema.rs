//! Config schema and deserialization

use crate::{AnalysisOptions, Dimension};
use serde::{Deserialize, Serialize};

/// File extensions collected when a directory is analyzed
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "markdown", "html", "htm", "txt"];

/// Root config structure for .contentgraderc.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Minimum overall score (exit 1 if any document is below)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File extensions to collect from directories (default: md, markdown, html, htm, txt)
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Analysis options; mistyped values fall back to defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<AnalysisOptions>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_threshold: Option<f64>,
        cli_keyword: Option<&str>,
        cli_skip: &[Dimension],
    ) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if cli_keyword.is_none() && cli_skip.is_empty() {
            return self;
        }
        let mut options = self.options.take().unwrap_or_default();
        if let Some(keyword) = cli_keyword {
            options = options.with_target_keyword(keyword);
        }
        for dimension in cli_skip {
            options = options.without(*dimension);
        }
        self.options = Some(options);
        self
    }

    /// Options to analyze with (defaults when the config sets none)
    pub fn analysis_options(&self) -> AnalysisOptions {
        self.options.clone().unwrap_or_default()
    }

    /// Merge a base config into this one (for extends). Values set here win.
    pub fn merge_from(&mut self, base: Config) {
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.options.is_none() {
            self.options = base.options;
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.extensions.is_empty() {
            self.extensions = base.extensions;
        }
    }

    /// Extensions (without leading dot, lowercase) to collect from directories
    pub fn get_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect()
        }
    }
}
