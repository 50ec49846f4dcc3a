//! Edge case tests: degenerate inputs must not panic.

use contentgrade::analyzer::ContentAnalyzer;
use contentgrade::{analyze_content, AnalysisOptions, Dimension, Metrics};
use std::io::Write;
use tempfile::NamedTempFile;

fn analyze(content: &str) -> contentgrade::AnalysisResult {
    analyze_content(content, &AnalysisOptions::default())
}

#[test]
fn empty_content_no_panic() {
    let r = analyze("");
    assert_eq!(r.analysis.len(), 6);
    assert!(r.overall_score >= 0.0);
    let Metrics::Keywords(k) = &r.dimension(Dimension::Keywords).unwrap().metrics else {
        panic!("keyword metrics missing");
    };
    assert!(k.primary_keywords.is_empty());
    assert_eq!(k.unique_words, 0);
}

#[test]
fn whitespace_only_no_panic() {
    let r = analyze("   \n\n\t \n");
    let readability = r.dimension(Dimension::Readability).unwrap();
    assert_eq!(readability.score, 0.0);
    assert!(readability
        .issues
        .contains(&"Unable to analyze readability".to_string()));
    let Metrics::Length(m) = &r.dimension(Dimension::Length).unwrap().metrics else {
        panic!("length metrics missing");
    };
    assert_eq!(m.word_count, 0);
    assert_eq!(m.paragraph_count, 0);
}

#[test]
fn single_character() {
    let r = analyze("x");
    let Metrics::Readability(m) = &r.dimension(Dimension::Readability).unwrap().metrics else {
        panic!("readability metrics missing");
    };
    assert_eq!(m.word_count, 1);
    assert_eq!(m.sentence_count, 1);
}

#[test]
fn punctuation_only() {
    let r = analyze("?!?...!!!");
    let readability = r.dimension(Dimension::Readability).unwrap();
    assert_eq!(readability.score, 0.0);
    let Metrics::Engagement(m) = &r.dimension(Dimension::Engagement).unwrap().metrics else {
        panic!("engagement metrics missing");
    };
    assert_eq!(m.question_count, 2);
}

#[test]
fn markup_only_counts_as_empty_text() {
    let r = analyze("<div><span></span></div>");
    let Metrics::Structure(m) = &r.dimension(Dimension::Structure).unwrap().metrics else {
        panic!("structure metrics missing");
    };
    assert_eq!(m.word_count, 0);
    assert!(!m.has_title);
}

#[test]
fn unclosed_tags_handled_gracefully() {
    let r = analyze("<h1>Broken title\n<p>text <a href=\"/x\"");
    assert!(r.overall_score >= 0.0);
    assert!(r.recommendations.len() <= 10);
}

#[test]
fn non_ascii_text() {
    let r = analyze("# Café résumé naïve\n\n¿Qué tal? Ünïcödé wörds everywhere. 日本語のテキスト。\n");
    let Metrics::Structure(s) = &r.dimension(Dimension::Structure).unwrap().metrics else {
        panic!("structure metrics missing");
    };
    assert!(s.has_title);
    let Metrics::Engagement(m) = &r.dimension(Dimension::Engagement).unwrap().metrics else {
        panic!("engagement metrics missing");
    };
    assert_eq!(m.question_count, 1);
}

#[test]
fn very_long_input() {
    let sentence = "The quick brown fox jumps over the lazy dog. ";
    let content = format!("# Long\n\n{}", sentence.repeat(20_000));
    let r = analyze(&content);
    let Metrics::Length(m) = &r.dimension(Dimension::Length).unwrap().metrics else {
        panic!("length metrics missing");
    };
    assert_eq!(m.word_count, 2 + 9 * 20_000);
    assert!(!m.ideal_range);
    assert!(r
        .dimension(Dimension::Length)
        .unwrap()
        .issues
        .contains(&"Paragraphs are too long".to_string()));
}

#[test]
fn all_dimensions_disabled() {
    let mut opts = AnalysisOptions::default();
    for dimension in Dimension::ALL {
        opts = opts.without(dimension);
    }
    let r = analyze_content("# Title\n\nBody.", &opts);
    assert!(r.analysis.is_empty());
    assert!(r.breakdown.is_empty());
    assert!(r.recommendations.is_empty());
    assert_eq!(r.overall_score, 0.0);
}

#[test]
fn blank_target_keyword_is_ignored() {
    let opts = AnalysisOptions::default().with_target_keyword("   ");
    assert!(opts.target_keyword.is_none());
    let r = analyze_content("# Title\n\nBody.", &opts);
    let Metrics::Seo(m) = &r.dimension(Dimension::Seo).unwrap().metrics else {
        panic!("seo metrics missing");
    };
    assert!(m.keyword_density.is_none());
}

#[test]
fn invalid_utf8_file_is_an_error_not_a_panic() {
    let mut file = NamedTempFile::with_suffix(".md").unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
    file.flush().unwrap();
    let result = ContentAnalyzer::new().analyze_file(file.path(), &AnalysisOptions::default());
    assert!(result.is_err());
}
