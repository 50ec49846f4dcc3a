//! Analyzer module - content quality analysis engine

pub mod dimensions;
pub mod engine;
pub mod recommendations;
pub mod scoring;

pub use dimensions::DimensionAnalyzer;
pub use engine::{AggregateStats, ContentAnalyzer};
pub use recommendations::RecommendationEngine;
pub use scoring::ScoreCalculator;
