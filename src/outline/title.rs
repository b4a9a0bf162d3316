//! Title resolution.
//!
//! Metadata first, page-1 display text as fallback, empty string last.
//! A pure function of (metadata, page-1 spans); rerunning it on the same
//! document always yields the same title.

use crate::model::{Metadata, TextSpan};
use crate::options::ExtractOptions;

use super::profile::size_key;

/// Resolve the document title.
pub fn resolve(
    metadata: &Metadata,
    spans: &[TextSpan],
    source_name: Option<&str>,
    options: &ExtractOptions,
) -> String {
    if let Some(title) = metadata_title(metadata, source_name, options) {
        return title;
    }

    page_one_title(spans, options.epsilon).unwrap_or_default()
}

/// Accept the metadata title unless it is empty, a placeholder, or just
/// the source filename echoed back by the producing application.
fn metadata_title(
    metadata: &Metadata,
    source_name: Option<&str>,
    options: &ExtractOptions,
) -> Option<String> {
    let raw = metadata.title.as_deref()?.trim();
    if raw.chars().count() <= 2 {
        return None;
    }

    let lower = raw.to_lowercase();
    if options
        .title_placeholders
        .iter()
        .any(|p| p.to_lowercase() == lower)
    {
        return None;
    }

    if let Some(name) = source_name {
        if name.to_lowercase() == lower {
            return None;
        }
    }

    Some(raw.to_string())
}

/// Concatenate the page-1 spans of the largest size class, in reading
/// order.
fn page_one_title(spans: &[TextSpan], epsilon: f32) -> Option<String> {
    let first_page: Vec<&TextSpan> = spans.iter().filter(|s| s.page == 1).collect();

    let max_key = first_page
        .iter()
        .map(|s| size_key(s.font_size, epsilon))
        .max()?;

    let parts: Vec<&str> = first_page
        .iter()
        .filter(|s| size_key(s.font_size, epsilon) == max_key)
        .map(|s| s.trimmed())
        .filter(|t| !t.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, size: f32, page: u32) -> TextSpan {
        TextSpan::new(text, size, "Helvetica", page, 0.0, 0.0)
    }

    fn with_title(title: &str) -> Metadata {
        Metadata {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_metadata_title_wins() {
        let metadata = with_title("  Understanding AI  ");
        let spans = vec![span("Something Else", 24.0, 1)];
        let title = resolve(&metadata, &spans, None, &ExtractOptions::default());
        assert_eq!(title, "Understanding AI");
    }

    #[test]
    fn test_placeholder_title_rejected() {
        let options = ExtractOptions::default();
        for placeholder in ["untitled", "Untitled", "DOCUMENT", "x"] {
            let metadata = with_title(placeholder);
            let spans = vec![span("Project Report", 24.0, 1)];
            let title = resolve(&metadata, &spans, None, &options);
            assert_eq!(title, "Project Report", "placeholder: {placeholder}");
        }
    }

    #[test]
    fn test_filename_echo_rejected() {
        let metadata = with_title("annual_report_2024");
        let spans = vec![span("Annual Report", 24.0, 1)];
        let title = resolve(
            &metadata,
            &spans,
            Some("annual_report_2024"),
            &ExtractOptions::default(),
        );
        assert_eq!(title, "Annual Report");
    }

    #[test]
    fn test_page_one_fallback_joins_size_class() {
        let spans = vec![
            span("Project", 23.8, 1),
            span("body text", 11.0, 1),
            span("Report", 24.1, 1),
            span("Ignored: page two", 30.0, 2),
        ];
        let title = resolve(
            &Metadata::default(),
            &spans,
            None,
            &ExtractOptions::default(),
        );
        assert_eq!(title, "Project Report");
    }

    #[test]
    fn test_no_spans_empty_title() {
        let title = resolve(
            &Metadata::default(),
            &[],
            None,
            &ExtractOptions::default(),
        );
        assert_eq!(title, "");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let spans = vec![span("Project Report", 24.0, 1), span("body", 11.0, 1)];
        let metadata = Metadata::default();
        let options = ExtractOptions::default();
        let first = resolve(&metadata, &spans, None, &options);
        let second = resolve(&metadata, &spans, None, &options);
        assert_eq!(first, second);
    }
}
