//! Outline construction: font profile, title resolution, heading
//! classification.
//!
//! This is the core of the crate. Everything here is a pure function of
//! the span sequence and the options; there is no I/O and no randomness,
//! so the same document always yields the same outline.

mod classifier;
mod profile;
mod title;

pub use classifier::merge_adjacent;
pub use profile::{FontProfile, SizeClass};

use crate::model::{Document, Metadata, TextSpan};
use crate::options::ExtractOptions;

/// Build the outline document from collected spans.
///
/// `source_name` is the input file stem when one is known; metadata titles
/// equal to it are treated as placeholders.
pub fn build(
    metadata: &Metadata,
    spans: &[TextSpan],
    source_name: Option<&str>,
    options: &ExtractOptions,
) -> Document {
    let profile = FontProfile::build(spans, options.epsilon);
    let title = title::resolve(metadata, spans, source_name, options);

    let mut doc = Document::new(title);
    doc.outline = classifier::classify(spans, &profile, options);
    doc
}
