//! Integration tests for the classification core on synthetic spans.

use pdftoc::{outline, ExtractOptions, FontProfile, HeadingLevel, Metadata, TextSpan};

fn span(text: &str, size: f32, page: u32) -> TextSpan {
    TextSpan::new(text, size, "Helvetica", page, 72.0, 700.0)
}

fn metadata_with_title(title: &str) -> Metadata {
    Metadata {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// Scenario A: metadata title, 24pt display type on page 1, then
/// 18/14/11pt headings over 10pt body.
#[test]
fn scenario_metadata_title_three_levels() {
    let mut spans = vec![span("Understanding Artificial Intelligence", 24.0, 1)];
    for page in 1..=3 {
        for _ in 0..40 {
            spans.push(span("plain body text for this page", 10.0, page));
        }
    }
    spans.push(span("Chapter One", 18.0, 2));
    spans.push(span("Key Concepts", 14.0, 2));
    spans.push(span("Agents and Environments", 11.0, 2));
    spans.push(span("Search Strategies", 11.0, 3));

    // Interleave in page order
    spans.sort_by_key(|s| s.page);

    let options = ExtractOptions::default();
    let doc = outline::build(&metadata_with_title("Understanding AI"), &spans, None, &options);

    assert_eq!(doc.title, "Understanding AI");

    let h1: Vec<_> = doc
        .outline
        .iter()
        .filter(|e| e.level == HeadingLevel::H1)
        .collect();
    assert_eq!(h1.len(), 1);
    assert_eq!(h1[0].text, "Chapter One");

    for entry in &doc.outline {
        match entry.text.as_str() {
            "Key Concepts" => assert_eq!(entry.level, HeadingLevel::H2),
            "Agents and Environments" | "Search Strategies" => {
                assert_eq!(entry.level, HeadingLevel::H3)
            }
            _ => {}
        }
    }

    // The 24pt display line never shows up in the outline
    assert!(doc
        .outline
        .iter()
        .all(|e| e.text != "Understanding Artificial Intelligence"));

    // Page order
    assert!(doc.outline.windows(2).all(|w| w[0].page <= w[1].page));
}

/// Scenario B: no spans at all (scanned/image-only document).
#[test]
fn scenario_empty_document() {
    let doc = outline::build(
        &Metadata::default(),
        &[],
        None,
        &ExtractOptions::default(),
    );
    assert_eq!(doc.title, "");
    assert!(doc.outline.is_empty());

    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, r#"{"title":"","outline":[]}"#);
}

/// Scenario C: one font size throughout; title resolves, outline empty.
#[test]
fn scenario_uniform_font_size() {
    let spans: Vec<TextSpan> = (0..60)
        .map(|i| span("uniform text", 12.0, 1 + i / 20))
        .collect();

    let with_metadata = outline::build(
        &metadata_with_title("Uniform Document"),
        &spans,
        None,
        &ExtractOptions::default(),
    );
    assert_eq!(with_metadata.title, "Uniform Document");
    assert!(with_metadata.outline.is_empty());

    let without_metadata = outline::build(
        &Metadata::default(),
        &spans,
        None,
        &ExtractOptions::default(),
    );
    // Fallback concatenates the page-1 spans of the single size class
    assert!(without_metadata.title.starts_with("uniform text"));
    assert!(without_metadata.outline.is_empty());
}

/// Scenario D: no metadata, single large line on page 1 becomes the title.
#[test]
fn scenario_page_one_fallback_title() {
    let mut spans = vec![span("Project Report", 24.0, 1)];
    for _ in 0..30 {
        spans.push(span("ordinary paragraph text", 11.0, 1));
    }

    let doc = outline::build(
        &Metadata::default(),
        &spans,
        None,
        &ExtractOptions::default(),
    );
    assert_eq!(doc.title, "Project Report");
}

/// Identical rounded sizes always map to the same level.
#[test]
fn level_mapping_is_consistent() {
    let mut spans: Vec<TextSpan> = (0..50).map(|_| span("body", 10.0, 1)).collect();
    for (i, size) in [16.0, 16.2, 15.9, 16.1].iter().enumerate() {
        spans.push(span("Recurring Heading", *size, 1 + i as u32));
    }

    let options = ExtractOptions::default();
    let doc = outline::build(&Metadata::default(), &spans, None, &options);

    let levels: Vec<HeadingLevel> = doc
        .outline
        .iter()
        .filter(|e| e.text == "Recurring Heading")
        .map(|e| e.level)
        .collect();
    assert_eq!(levels.len(), 4);
    assert!(levels.iter().all(|&l| l == levels[0]));
}

/// Threshold invariant: h1 >= h2 >= h3, all observed sizes.
#[test]
fn thresholds_are_ordered_and_observed() {
    let mut spans: Vec<TextSpan> = (0..50).map(|_| span("body", 9.5, 2)).collect();
    spans.push(span("Alpha", 19.7, 2));
    spans.push(span("Beta", 15.3, 2));
    spans.push(span("Gamma", 12.1, 3));

    let profile = FontProfile::build(&spans, 0.5);
    let (h1, h2, h3) = (
        profile.h1.unwrap(),
        profile.h2.unwrap(),
        profile.h3.unwrap(),
    );
    assert!(h1 >= h2 && h2 >= h3);

    let observed: Vec<f32> = spans.iter().map(|s| s.font_size).collect();
    for t in [h1, h2, h3] {
        assert!(observed.contains(&t));
    }
}

/// Whole-pipeline determinism: same spans, same outline, every time.
#[test]
fn build_is_idempotent() {
    let mut spans: Vec<TextSpan> = (0..80).map(|i| span("body", 10.0, 1 + i / 40)).collect();
    spans.push(span("Heading A", 16.0, 1));
    spans.push(span("Heading B", 16.0, 2));
    spans.sort_by_key(|s| s.page);

    let metadata = metadata_with_title("Stable");
    let options = ExtractOptions::default();

    let runs: Vec<_> = (0..3)
        .map(|_| outline::build(&metadata, &spans, None, &options))
        .collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}
