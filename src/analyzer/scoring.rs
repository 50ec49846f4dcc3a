//! Score aggregation across dimensions

use crate::text::round_to;
use crate::{Dimension, DimensionBreakdown, DimensionResult, Grade};
use std::collections::BTreeMap;

const MAX_SCORE: f64 = 100.0;

/// Calculator for the overall content score
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Weight and contribution of each analyzed dimension
    pub fn breakdown(analysis: &BTreeMap<Dimension, DimensionResult>) -> Vec<DimensionBreakdown> {
        analysis
            .iter()
            .map(|(&dimension, result)| DimensionBreakdown {
                dimension,
                raw_score: result.score,
                weight: dimension.weight(),
                weighted_contribution: round_to(result.score * dimension.weight(), 2),
            })
            .collect()
    }

    /// Weighted sum of the analyzed dimensions, capped at 100 and rounded to
    /// 2 decimals. Missing dimensions contribute nothing and their weight is
    /// not redistributed. There is no floor: negative raw scores pull the
    /// total down.
    pub fn overall(analysis: &BTreeMap<Dimension, DimensionResult>) -> f64 {
        let total = analysis
            .iter()
            .fold(0.0, |acc, (dimension, result)| {
                acc + result.score * dimension.weight()
            });
        round_to(total.min(MAX_SCORE), 2)
    }

    /// Get a description of the grade
    pub fn grade_description(grade: Grade) -> &'static str {
        match grade {
            Grade::APlus => "Outstanding - Ready to publish",
            Grade::A => "Excellent - Minor polish would help",
            Grade::BPlus => "Very good - A few improvements recommended",
            Grade::B => "Good - Solid draft with clear room for improvement",
            Grade::CPlus => "Fair - Needs work on several dimensions",
            Grade::C => "Weak - Significant revisions needed",
            Grade::F => "Failing - Content needs a major rewrite",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LengthMetrics, Metrics};

    fn result(score: f64) -> DimensionResult {
        DimensionResult {
            score,
            issues: vec![],
            metrics: Metrics::Length(LengthMetrics::default()),
        }
    }

    fn analysis(scores: &[(Dimension, f64)]) -> BTreeMap<Dimension, DimensionResult> {
        scores.iter().map(|&(d, s)| (d, result(s))).collect()
    }

    #[test]
    fn test_weighted_sum() {
        let a = analysis(&[
            (Dimension::Structure, 80.0),
            (Dimension::Readability, 40.0),
            (Dimension::Seo, 50.0),
            (Dimension::Length, 50.0),
            (Dimension::Keywords, 20.0),
            (Dimension::Engagement, 60.0),
        ]);
        // 20 + 8 + 10 + 7.5 + 2 + 6
        assert_eq!(ScoreCalculator::overall(&a), 53.5);
        assert_eq!(Grade::from_score(53.5), Grade::CPlus);
    }

    #[test]
    fn test_overall_capped_at_hundred() {
        let a = analysis(&[
            (Dimension::Structure, 400.0),
            (Dimension::Readability, 40.0),
        ]);
        assert_eq!(ScoreCalculator::overall(&a), 100.0);
    }

    #[test]
    fn test_disabled_dimension_weight_not_redistributed() {
        let all = analysis(&[(Dimension::Structure, 40.0), (Dimension::Length, 40.0)]);
        let only_structure = analysis(&[(Dimension::Structure, 40.0)]);
        assert_eq!(ScoreCalculator::overall(&all), 16.0);
        assert_eq!(ScoreCalculator::overall(&only_structure), 10.0);
    }

    #[test]
    fn test_negative_scores_not_floored() {
        let a = analysis(&[(Dimension::Readability, -5.0)]);
        assert_eq!(ScoreCalculator::overall(&a), -1.0);
        assert_eq!(Grade::from_score(-1.0), Grade::F);
    }

    #[test]
    fn test_empty_analysis() {
        assert_eq!(ScoreCalculator::overall(&BTreeMap::new()), 0.0);
        assert!(ScoreCalculator::breakdown(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_breakdown() {
        let a = analysis(&[(Dimension::Seo, 45.0), (Dimension::Structure, 85.0)]);
        let b = ScoreCalculator::breakdown(&a);
        assert_eq!(b.len(), 2);
        assert_eq!(b[0].dimension, Dimension::Structure);
        assert_eq!(b[0].weighted_contribution, 21.25);
        assert_eq!(b[1].dimension, Dimension::Seo);
        assert_eq!(b[1].weight, 0.2);
        assert_eq!(b[1].weighted_contribution, 9.0);
    }

    #[test]
    fn test_grade_description_all_grades() {
        assert!(ScoreCalculator::grade_description(Grade::APlus).contains("Outstanding"));
        assert!(ScoreCalculator::grade_description(Grade::A).contains("Excellent"));
        assert!(ScoreCalculator::grade_description(Grade::BPlus).contains("Very good"));
        assert!(ScoreCalculator::grade_description(Grade::B).contains("Good"));
        assert!(ScoreCalculator::grade_description(Grade::CPlus).contains("Fair"));
        assert!(ScoreCalculator::grade_description(Grade::C).contains("Weak"));
        assert!(ScoreCalculator::grade_description(Grade::F).contains("Failing"));
    }
}
