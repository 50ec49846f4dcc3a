//! Keyword frequency and distribution across the document

use super::{DimensionAnalyzer, Findings};
use crate::text::PlainText;
use crate::{AnalysisOptions, Dimension, DimensionResult, KeywordCount, KeywordMetrics, Metrics};
use std::collections::HashMap;

const TOP_KEYWORDS: usize = 10;
const EDGE_WINDOW: usize = 100;
const POINTS_PER_EDGE: u32 = 5;
const MAX_DISTRIBUTION: u32 = 20;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Finds the primary keywords and checks they open and close the piece
pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn is_stop_word(token: &str) -> bool {
        STOP_WORDS.contains(&token)
    }

    /// Lowercased tokens with leading and trailing punctuation removed
    fn normalized_tokens(text: &PlainText) -> Vec<String> {
        text.as_str()
            .to_lowercase()
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Token counts in first-encounter order
    fn frequency_table(tokens: &[String]) -> Vec<KeywordCount> {
        let mut table: Vec<KeywordCount> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            match index.get(token.as_str()) {
                Some(&i) => table[i].count += 1,
                None => {
                    index.insert(token.as_str(), table.len());
                    table.push(KeywordCount {
                        keyword: token.clone(),
                        count: 1,
                    });
                }
            }
        }
        table
    }

    /// Most frequent non-stop-words; equal counts keep encounter order
    pub fn primary_keywords(text: &PlainText) -> Vec<KeywordCount> {
        let tokens = Self::normalized_tokens(text);
        Self::top_keywords(Self::frequency_table(&tokens))
    }

    fn top_keywords(table: Vec<KeywordCount>) -> Vec<KeywordCount> {
        let mut keywords: Vec<KeywordCount> = table
            .into_iter()
            .filter(|k| !Self::is_stop_word(&k.keyword))
            .collect();
        // sort_by is stable
        keywords.sort_by(|a, b| b.count.cmp(&a.count));
        keywords.truncate(TOP_KEYWORDS);
        keywords
    }

    fn distribution(tokens: &[String], keywords: &[KeywordCount]) -> u32 {
        let head = &tokens[..tokens.len().min(EDGE_WINDOW)];
        let tail = &tokens[tokens.len().saturating_sub(EDGE_WINDOW)..];
        let points: u32 = keywords
            .iter()
            .filter(|k| k.count > 1)
            .map(|k| {
                let mut p = 0;
                if head.contains(&k.keyword) {
                    p += POINTS_PER_EDGE;
                }
                if tail.contains(&k.keyword) {
                    p += POINTS_PER_EDGE;
                }
                p
            })
            .sum();
        points.min(MAX_DISTRIBUTION)
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionAnalyzer for KeywordAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Keywords
    }

    fn analyze(&self, content: &str, _options: &AnalysisOptions) -> DimensionResult {
        let text = PlainText::from_markup(content);
        let tokens = Self::normalized_tokens(&text);
        let table = Self::frequency_table(&tokens);
        let unique_words = table.len();
        let primary_keywords = Self::top_keywords(table);
        let keyword_distribution = Self::distribution(&tokens, &primary_keywords);

        let mut findings = Findings::new();
        findings.set(keyword_distribution as f64);
        findings.finish(Metrics::Keywords(KeywordMetrics {
            primary_keywords,
            unique_words,
            keyword_distribution,
        }))
    }
}
