//! # pdftoc
//!
//! Font-size driven PDF outline extraction for Rust.
//!
//! pdftoc reads a PDF, surveys its font sizes, and derives a title plus
//! an H1/H2/H3 outline with page numbers, serialized to a fixed JSON
//! schema. Classification is purely structural: the most frequent size
//! class is taken as body text and the classes above it become heading
//! thresholds. No OCR, no layout analysis, no models.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdftoc::{extract_file, render, JsonFormat};
//!
//! fn main() -> pdftoc::Result<()> {
//!     let doc = extract_file("report.pdf")?;
//!     println!("{}", render::to_json(&doc, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Output schema
//!
//! ```json
//! {
//!   "title": "Understanding AI",
//!   "outline": [
//!     { "level": "H1", "text": "Introduction", "page": 1 }
//!   ]
//! }
//! ```

pub mod batch;
pub mod error;
pub mod model;
pub mod options;
pub mod outline;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, HeadingLevel, Metadata, OutlineEntry, TextSpan};
pub use options::{ErrorMode, ExtractOptions};
pub use outline::{merge_adjacent, FontProfile};
pub use parser::PdfParser;
pub use render::{to_json, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Extract the outline of a PDF file.
///
/// # Example
///
/// ```no_run
/// let doc = pdftoc::extract_file("report.pdf").unwrap();
/// println!("{} headings", doc.outline.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    extract_file_with_options(path, ExtractOptions::default())
}

/// Extract the outline of a PDF file with custom options.
///
/// The file stem is remembered so that metadata titles which merely echo
/// the filename fall through to the page-1 fallback.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Document> {
    let path = path.as_ref();
    let source_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned());

    let parser = PdfParser::open(path)?;
    let metadata = parser.metadata();
    let spans = parser.collect_spans(&options)?;

    Ok(outline::build(
        &metadata,
        &spans,
        source_name.as_deref(),
        &options,
    ))
}

/// Extract the outline of a PDF from bytes.
pub fn extract_bytes(data: &[u8]) -> Result<Document> {
    extract_bytes_with_options(data, ExtractOptions::default())
}

/// Extract the outline of a PDF from bytes with custom options.
pub fn extract_bytes_with_options(data: &[u8], options: ExtractOptions) -> Result<Document> {
    let parser = PdfParser::from_bytes(data)?;
    let metadata = parser.metadata();
    let spans = parser.collect_spans(&options)?;

    Ok(outline::build(&metadata, &spans, None, &options))
}

/// Extract the outline of a PDF from a reader.
pub fn extract_reader<R: Read>(reader: R) -> Result<Document> {
    let options = ExtractOptions::default();
    let parser = PdfParser::from_reader(reader)?;
    let metadata = parser.metadata();
    let spans = parser.collect_spans(&options)?;

    Ok(outline::build(&metadata, &spans, None, &options))
}

/// Extract a PDF file's outline and serialize it in one step.
pub fn extract_to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = extract_file(path)?;
    render::to_json(&doc, format)
}
