//! Document model types for outline extraction.
//!
//! The model bridges the PDF parsing boundary and the classification
//! stages: spans come in from the parser, the outline document goes out
//! to the JSON renderer.

mod document;
mod outline;
mod span;

pub use document::{Document, Metadata};
pub use outline::{HeadingLevel, OutlineEntry};
pub use span::TextSpan;
