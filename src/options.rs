//! Extraction options and configuration.

use regex::Regex;

use crate::error::{Error, Result};

/// Default size-class tolerance in points.
pub const DEFAULT_EPSILON: f32 = 0.5;

/// Options controlling span collection and heading classification.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Error handling mode for page-level failures
    pub error_mode: ErrorMode,

    /// Tolerance for grouping near-identical font sizes into one class
    pub epsilon: f32,

    /// Minimum heading text length in characters
    pub min_heading_chars: usize,

    /// Maximum heading text length in characters
    pub max_heading_chars: usize,

    /// Spans matching any of these patterns are never emitted as headings
    pub ignore_patterns: Vec<Regex>,

    /// Require bold type for heading candidates
    pub bold_headings_only: bool,

    /// Metadata titles equal to any of these (case-insensitive) are rejected
    pub title_placeholders: Vec<String>,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Fail the whole document when a page cannot be decoded.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Skip undecodable pages (they contribute zero spans).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the size-class tolerance in points.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon.max(0.1);
        self
    }

    /// Set the heading text length bounds.
    pub fn with_heading_chars(mut self, min: usize, max: usize) -> Self {
        self.min_heading_chars = min;
        self.max_heading_chars = max.max(min);
        self
    }

    /// Add an ignore pattern for heading candidates.
    pub fn with_ignore_pattern(mut self, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| Error::InvalidPattern(e.to_string()))?;
        self.ignore_patterns.push(re);
        Ok(self)
    }

    /// Only accept bold spans as headings.
    pub fn bold_headings_only(mut self) -> Self {
        self.bold_headings_only = true;
        self
    }

    /// Add a metadata title placeholder to reject.
    pub fn with_title_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.title_placeholders.push(placeholder.into());
        self
    }

    /// Check whether text matches any ignore pattern.
    pub fn is_ignored(&self, text: &str) -> bool {
        self.ignore_patterns.iter().any(|re| re.is_match(text))
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            epsilon: DEFAULT_EPSILON,
            min_heading_chars: 3,
            max_heading_chars: 120,
            ignore_patterns: default_ignore_patterns(),
            bold_headings_only: false,
            title_placeholders: vec![
                "untitled".to_string(),
                "unknown".to_string(),
                "document".to_string(),
            ],
        }
    }
}

/// Patterns for text that shows up at heading sizes but is never a heading:
/// bare numbers, figure/table captions, page markers.
fn default_ignore_patterns() -> Vec<Regex> {
    [
        r"^\d+\.?$",
        r"(?i)^fig\.?\s*\d+",
        r"(?i)^table\s+\d+",
        r"(?i)^page\s+\d+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

/// Error handling mode for page-level decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any page decode error
    Strict,
    /// Skip undecodable pages and continue
    #[default]
    Lenient,
}
