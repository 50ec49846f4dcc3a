//! Analysis engine - orchestrates all dimension analyzers

use crate::text::round_to;
use crate::{AnalysisOptions, AnalysisResult, Dimension, DimensionResult, Grade};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::dimensions::{all_analyzers, DimensionAnalyzer};
use super::recommendations::RecommendationEngine;
use super::ScoreCalculator;

/// Main analysis engine that runs the enabled dimensions and combines them
pub struct ContentAnalyzer {
    analyzers: Vec<Box<dyn DimensionAnalyzer>>,
}

impl ContentAnalyzer {
    /// Create an analyzer with all six dimensions
    pub fn new() -> Self {
        Self {
            analyzers: all_analyzers(),
        }
    }

    /// Analyze content, stamping the result with the current time
    pub fn analyze(&self, content: &str, options: &AnalysisOptions) -> AnalysisResult {
        self.analyze_at(content, options, Utc::now())
    }

    /// Analyze content with an explicit timestamp. Identical inputs give
    /// identical results.
    pub fn analyze_at(
        &self,
        content: &str,
        options: &AnalysisOptions,
        timestamp: DateTime<Utc>,
    ) -> AnalysisResult {
        if options.check_originality {
            tracing::debug!("originality checking is not available; ignoring check_originality");
        }

        let mut analysis: BTreeMap<Dimension, DimensionResult> = BTreeMap::new();
        for analyzer in &self.analyzers {
            let dimension = analyzer.dimension();
            if !options.is_enabled(dimension) {
                tracing::trace!(%dimension, "dimension disabled");
                continue;
            }
            let result = analyzer.analyze(content, options);
            tracing::debug!(
                %dimension,
                score = result.score,
                issues = result.issues.len(),
                "dimension analyzed"
            );
            analysis.insert(dimension, result);
        }

        let overall_score = ScoreCalculator::overall(&analysis);
        let breakdown = ScoreCalculator::breakdown(&analysis);
        let recommendations = RecommendationEngine::generate(&analysis);

        AnalysisResult {
            source: None,
            overall_score,
            grade: Grade::from_score(overall_score),
            analysis,
            breakdown,
            recommendations,
            timestamp,
        }
    }

    /// Read a file and analyze its content
    pub fn analyze_file(&self, path: &Path, options: &AnalysisOptions) -> Result<AnalysisResult> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        let mut result = self.analyze(&content, options);
        result.source = Some(path.to_path_buf());
        Ok(result)
    }

    /// Analyze multiple files sequentially
    pub fn analyze_many(
        &self,
        paths: &[PathBuf],
        options: &AnalysisOptions,
    ) -> Vec<Result<AnalysisResult>> {
        paths.iter().map(|p| self.analyze_file(p, options)).collect()
    }

    /// Analyze multiple files in parallel using rayon
    pub fn analyze_parallel(
        &self,
        paths: &[PathBuf],
        options: &AnalysisOptions,
    ) -> Vec<Result<AnalysisResult>> {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|p| self.analyze_file(p, options))
            .collect()
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(results: &[AnalysisResult]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let count = results.len() as f64;
        let average_score = round_to(
            results.iter().map(|r| r.overall_score).sum::<f64>() / count,
            2,
        );

        let mut dimension_totals: BTreeMap<Dimension, (f64, usize)> = BTreeMap::new();
        for (dimension, result) in results.iter().flat_map(|r| r.analysis.iter()) {
            let entry = dimension_totals.entry(*dimension).or_insert((0.0, 0));
            entry.0 += result.score;
            entry.1 += 1;
        }
        let dimension_averages = dimension_totals
            .into_iter()
            .map(|(d, (total, n))| (d, round_to(total / n as f64, 2)))
            .collect();

        AggregateStats {
            files_analyzed: results.len(),
            average_score,
            average_grade: Grade::from_score(average_score),
            total_recommendations: results.iter().map(|r| r.recommendations.len()).sum(),
            dimension_averages,
        }
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple document analyses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Number of documents analyzed
    pub files_analyzed: usize,
    /// Mean overall score
    pub average_score: f64,
    pub average_grade: Grade,
    /// Total number of recommendations across all documents
    pub total_recommendations: usize,
    /// Mean raw score per dimension, over documents where it ran
    pub dimension_averages: BTreeMap<Dimension, f64>,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            files_analyzed: 0,
            average_score: 0.0,
            average_grade: Grade::F,
            total_recommendations: 0,
            dimension_averages: BTreeMap::new(),
        }
    }
}
