//! Text span boundary type.

/// A text span with font and position information.
///
/// One span is a contiguous run of text sharing a single font size and
/// style within a page, as reported by the PDF text extraction layer.
/// Spans are immutable once collected; the classification stages only
/// read them.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Font name (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Whether the font appears to be bold
    pub is_bold: bool,
    /// Whether the font appears to be italic
    pub is_italic: bool,
    /// Page number (1-indexed)
    pub page: u32,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline)
    pub y: f32,
}

impl TextSpan {
    /// Create a new text span, deriving style flags from the font name.
    pub fn new(
        text: impl Into<String>,
        font_size: f32,
        font_name: impl Into<String>,
        page: u32,
        x: f32,
        y: f32,
    ) -> Self {
        let font_name = font_name.into();
        let lower = font_name.to_lowercase();
        let is_bold =
            lower.contains("bold") || lower.contains("black") || lower.contains("heavy");
        let is_italic = lower.contains("italic") || lower.contains("oblique");

        Self {
            text: text.into(),
            font_size,
            font_name,
            is_bold,
            is_italic,
            page,
            x,
            y,
        }
    }

    /// Get the text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check whether the span carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_detection() {
        let span = TextSpan::new("Test", 12.0, "Helvetica-Bold", 1, 0.0, 0.0);
        assert!(span.is_bold);
        assert!(!span.is_italic);

        let span = TextSpan::new("Test", 12.0, "Helvetica-Oblique", 1, 0.0, 0.0);
        assert!(!span.is_bold);
        assert!(span.is_italic);

        let span = TextSpan::new("Test", 12.0, "Arial-Black", 1, 0.0, 0.0);
        assert!(span.is_bold);
    }

    #[test]
    fn test_blank_span() {
        let span = TextSpan::new("  \t ", 12.0, "Helvetica", 1, 0.0, 0.0);
        assert!(span.is_blank());

        let span = TextSpan::new(" Overview ", 12.0, "Helvetica", 1, 0.0, 0.0);
        assert!(!span.is_blank());
        assert_eq!(span.trimmed(), "Overview");
    }
}
