//! Extraction vector tests against captured package-page HTML.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use pullshield_core::stats::StatsExtractor;

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

fn extractor() -> StatsExtractor {
    StatsExtractor::new().unwrap()
}

#[test]
fn title_attribute_and_text_agree() {
    let stats = extractor().extract(&load("repo_page.html"));
    assert_eq!(stats.raw, Some(1234));
    assert_eq!(stats.formatted.as_deref(), Some("1,234"));
}

#[test]
fn title_attribute_wins_over_abbreviated_text() {
    let stats = extractor().extract(&load("abbreviated.html"));
    assert_eq!(stats.raw, Some(1234));
    // The visible text is kept verbatim as the human-readable count.
    assert_eq!(stats.formatted.as_deref(), Some("1.2k"));
}

#[test]
fn falls_back_to_heading_text_when_title_missing() {
    let stats = extractor().extract(&load("no_title.html"));
    assert_eq!(stats.raw, Some(987));
    assert_eq!(stats.formatted.as_deref(), Some("987"));
}

#[test]
fn page_without_label_yields_no_stats() {
    let stats = extractor().extract(&load("no_stats.html"));
    assert_eq!(stats.raw, None);
    assert_eq!(stats.formatted, None);
}

#[test]
fn heading_beyond_bounded_span_is_not_matched() {
    let stats = extractor().extract(&load("label_too_far.html"));
    assert_eq!(stats.raw, None);
    assert_eq!(stats.formatted, None);
}

#[test]
fn label_match_is_case_insensitive() {
    let html = r#"<span>TOTAL DOWNLOADS</span><h3 title="42">42</h3>"#;
    let stats = extractor().extract(html);
    assert_eq!(stats.raw, Some(42));
}

#[test]
fn grouping_commas_are_stripped_from_raw() {
    let html = r#"<span>Total downloads</span><h3 title="12,345,678">12.3M</h3>"#;
    let stats = extractor().extract(html);
    assert_eq!(stats.raw, Some(12_345_678));
    assert_eq!(stats.formatted.as_deref(), Some("12.3M"));
}
