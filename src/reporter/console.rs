//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::scoring::ScoreCalculator;
use crate::{AnalysisResult, Grade, Priority, Recommendation};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single analysis result
    pub fn report(&self, result: &AnalysisResult) {
        self.print_header(result);
        self.print_score(result);
        self.print_breakdown(result);

        if self.verbose {
            self.print_issues(result);
        }

        self.print_recommendations(result);
        println!();
    }

    /// Report multiple results with summary
    pub fn report_many(&self, results: &[AnalysisResult], stats: &AggregateStats) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, result: &AnalysisResult) {
        let grade_colored = self.colorize_grade(&result.grade);
        println!(
            "{}: {} ({})",
            source_label(result),
            result.overall_score,
            grade_colored
        );
    }

    fn print_header(&self, result: &AnalysisResult) {
        println!();
        println!(
            "{}",
            format!("📊 Content Quality Analysis: {}", source_label(result)).bold()
        );
        println!(
            "   Dimensions: {} | Recommendations: {}",
            result.analysis.len(),
            result.recommendations.len()
        );
        println!();
    }

    fn print_score(&self, result: &AnalysisResult) {
        let grade_str = self.colorize_grade(&result.grade);
        let score_bar = self.create_score_bar(result.overall_score);

        println!("   Score: {} {}", score_bar, grade_str.bold());
        println!(
            "   {}",
            ScoreCalculator::grade_description(result.grade).dimmed()
        );
        println!();
    }

    fn print_breakdown(&self, result: &AnalysisResult) {
        if result.breakdown.is_empty() {
            return;
        }
        println!("   {}", "Score Breakdown:".bold());

        for entry in &result.breakdown {
            let max = entry.dimension.max_score();
            let bar = create_mini_bar(entry.raw_score, max);
            let score_str = format!("{:>5.1}/{}", entry.raw_score, max);
            let colored_score = if !self.use_colors {
                score_str.normal()
            } else {
                match score_band(entry.raw_score, max) {
                    Band::Good => score_str.green(),
                    Band::Fair => score_str.yellow(),
                    Band::Poor => score_str.red(),
                }
            };
            println!(
                "   {} {} {} (weight {}%, contributes {})",
                bar,
                colored_score,
                entry.dimension.label(),
                (entry.weight * 100.0).round(),
                entry.weighted_contribution
            );
        }
        println!();
    }

    fn print_issues(&self, result: &AnalysisResult) {
        let total: usize = result.analysis.values().map(|r| r.issues.len()).sum();
        if total == 0 {
            return;
        }
        println!("   {}", "Issues Found:".bold());
        for (dimension, dim_result) in &result.analysis {
            for issue in &dim_result.issues {
                println!(
                    "   {} [{}] {}",
                    "•".dimmed(),
                    dimension.to_string().dimmed(),
                    issue
                );
            }
        }
        println!();
    }

    fn print_recommendations(&self, result: &AnalysisResult) {
        if result.recommendations.is_empty() {
            println!("   {} {}", "✓".green(), "No recommendations".green());
            return;
        }

        println!("   {}", "Recommendations:".bold());
        for rec in &result.recommendations {
            self.print_recommendation(rec);
        }
    }

    fn print_recommendation(&self, rec: &Recommendation) {
        let icon = match rec.priority {
            Priority::High => "✗".red(),
            Priority::Medium => "⚠".yellow(),
            Priority::Low => "ℹ".blue(),
        };
        println!(
            "   {} [{}] [{}] {}",
            icon,
            rec.priority.to_string().dimmed(),
            rec.dimension.to_string().dimmed(),
            rec.issue
        );
        println!("       {} {}", "→".dimmed(), rec.suggestion.italic());
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Files analyzed:  {}",
            stats.files_analyzed.to_string().bold()
        );
        println!(
            "   Average score:   {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_grade(&stats.average_grade)
        );
        println!("   Recommendations: {}", stats.total_recommendations);
        if self.verbose {
            for (dimension, average) in &stats.dimension_averages {
                println!("     {:<12} {:>6.2}", dimension.label(), average);
            }
        }
        println!();
    }

    fn colorize_grade(&self, grade: &Grade) -> colored::ColoredString {
        let s = grade.to_string();
        match grade {
            Grade::APlus => s.green().bold(),
            Grade::A | Grade::BPlus => s.green(),
            Grade::B | Grade::CPlus => s.yellow(),
            Grade::C => s.red(),
            Grade::F => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: f64) -> String {
        let bar = score_bar(score);

        if self.use_colors {
            if score >= 80.0 {
                bar.green().to_string()
            } else if score >= 60.0 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn source_label(result: &AnalysisResult) -> String {
    result
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string())
}

/// Cells filled out of `width` for a score on a 0-100 scale
fn filled_cells(score: f64, width: usize) -> usize {
    let clamped = score.clamp(0.0, 100.0);
    ((clamped / 100.0) * width as f64).floor() as usize
}

fn score_bar(score: f64) -> String {
    let filled = filled_cells(score, 20);
    format!(
        "[{}{}] {:>6.2}",
        "█".repeat(filled),
        "░".repeat(20 - filled),
        score
    )
}

#[derive(Debug, PartialEq, Eq)]
enum Band {
    Good,
    Fair,
    Poor,
}

/// Color band of a raw dimension score relative to that dimension's maximum
fn score_band(raw: f64, max: f64) -> Band {
    let percent = if max > 0.0 { raw / max * 100.0 } else { 0.0 };
    if percent >= 80.0 {
        Band::Good
    } else if percent >= 60.0 {
        Band::Fair
    } else {
        Band::Poor
    }
}

fn create_mini_bar(raw: f64, max: f64) -> String {
    let percent = if max > 0.0 { raw / max * 100.0 } else { 0.0 };
    let filled = filled_cells(percent, 10);
    format!("[{}{}]", "▓".repeat(filled), "░".repeat(10 - filled))
}
