//! Text frame, paragraph, and run models.

use super::Color;
use serde::{Deserialize, Serialize};

/// Text style properties applied to a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Font color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TextStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bold style.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Create a bold style with a font color.
    pub fn bold_colored(color: Color) -> Self {
        Self {
            bold: true,
            color: Some(color),
        }
    }

    /// Check if the style has any formatting.
    pub fn has_formatting(&self) -> bool {
        self.bold || self.color.is_some()
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: TextStyle,
}

fn is_default_style(style: &TextStyle) -> bool {
    *style == TextStyle::default()
}

impl TextRun {
    /// Create a plain text run with no styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a styled text run.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A paragraph of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in this paragraph
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
        }
    }

    /// Add a text run to this paragraph.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if this paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.runs.iter().all(|r| r.is_empty())
    }
}

/// The text content of a placeholder: an ordered list of paragraphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextFrame {
    /// Paragraphs in this frame
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Create an empty text frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from plain text, one paragraph per line.
    ///
    /// Empty lines become empty paragraphs, so blank separator lines in
    /// bulleted bodies survive the round trip. Bullet markers stay literal
    /// characters in the text.
    pub fn from_text(text: impl AsRef<str>) -> Self {
        Self {
            paragraphs: text
                .as_ref()
                .split('\n')
                .map(Paragraph::with_text)
                .collect(),
        }
    }

    /// Get all text joined with newlines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the frame has no text at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style() {
        let style = TextStyle::bold();
        assert!(style.bold);
        assert!(style.has_formatting());

        let plain = TextStyle::default();
        assert!(!plain.has_formatting());

        let header = TextStyle::bold_colored(Color::WHITE);
        assert!(header.bold);
        assert_eq!(header.color, Some(Color::WHITE));
    }

    #[test]
    fn test_paragraph() {
        let para = Paragraph::with_text("Hello, World!");
        assert_eq!(para.plain_text(), "Hello, World!");
        assert!(!para.is_empty());
    }

    #[test]
    fn test_frame_from_text_splits_lines() {
        let frame = TextFrame::from_text("Efficiency\n\n• Save time\n• Reduce errors");
        assert_eq!(frame.paragraphs.len(), 4);
        assert_eq!(frame.paragraphs[0].plain_text(), "Efficiency");
        assert!(frame.paragraphs[1].is_empty());
        assert_eq!(frame.paragraphs[2].plain_text(), "• Save time");
    }

    #[test]
    fn test_frame_plain_text_round_trip() {
        let text = "Key Takeaways:\n\n✓ First\n✓ Second";
        assert_eq!(TextFrame::from_text(text).plain_text(), text);
    }

    #[test]
    fn test_run_serialization_skips_defaults() {
        let run = TextRun::plain("Test");
        let json = serde_json::to_string(&run).unwrap();
        assert!(!json.contains("style"));
    }
}
