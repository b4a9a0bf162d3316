//! Document-level types.

use super::OutlineEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The extracted outline document.
///
/// Field order matters: the JSON output is `title` first, then `outline`.
/// `outline` is always present, possibly empty; `title` defaults to the
/// empty string, never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Resolved document title (empty string if unresolved)
    pub title: String,

    /// Classified headings in reading order
    pub outline: Vec<OutlineEntry>,
}

impl Document {
    /// Create a new document with an empty outline.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outline: Vec::new(),
        }
    }

    /// Create an empty document (no title, no outline).
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Add an entry to the outline.
    pub fn push(&mut self, entry: OutlineEntry) {
        self.outline.push(entry);
    }

    /// Check whether the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Number of outline entries.
    pub fn len(&self) -> usize {
        self.outline.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// Document metadata from the PDF information dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,

    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages
    pub page_count: u32,

    /// Whether the document is encrypted
    pub encrypted: bool,
}

impl Metadata {
    /// Create new metadata with PDF version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            pdf_version: version.into(),
            ..Default::default()
        }
    }
}
