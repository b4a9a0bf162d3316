//! PDF parsing boundary.
//!
//! Everything that touches lopdf lives here. The rest of the crate only
//! sees [`Metadata`](crate::model::Metadata) and flat, ordered
//! [`TextSpan`](crate::model::TextSpan) sequences.

mod pdf_parser;
mod spans;

pub use pdf_parser::PdfParser;
