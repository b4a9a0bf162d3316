//! Heading classification.
//!
//! Walks the span sequence in document order and emits one outline entry
//! per qualifying span. No merging happens here; the output ordering is
//! exactly the input ordering, filtered.

use crate::model::{OutlineEntry, TextSpan};
use crate::options::ExtractOptions;

use super::profile::FontProfile;

/// Classify spans against the font profile.
pub fn classify(
    spans: &[TextSpan],
    profile: &FontProfile,
    options: &ExtractOptions,
) -> Vec<OutlineEntry> {
    if !profile.has_thresholds() {
        return Vec::new();
    }

    let mut entries = Vec::new();

    for span in spans {
        let text = span.trimmed();
        if text.is_empty() {
            continue;
        }

        let chars = text.chars().count();
        if chars < options.min_heading_chars || chars > options.max_heading_chars {
            continue;
        }

        if options.is_ignored(text) {
            continue;
        }

        if options.bold_headings_only && !span.is_bold {
            continue;
        }

        let Some(level) = profile.level_for(span.font_size) else {
            continue;
        };

        entries.push(OutlineEntry::new(level, text, span.page));
    }

    entries
}

/// Presentation helper: join consecutive entries with the same level on
/// the same page into one. The classifier itself never merges; callers
/// opt in.
pub fn merge_adjacent(entries: Vec<OutlineEntry>) -> Vec<OutlineEntry> {
    let mut merged: Vec<OutlineEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        match merged.last_mut() {
            Some(last) if last.level == entry.level && last.page == entry.page => {
                last.text.push(' ');
                last.text.push_str(&entry.text);
            }
            _ => merged.push(entry),
        }
    }

    merged
}
