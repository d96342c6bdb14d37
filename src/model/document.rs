//! Presentation and slide model structures.

use super::{Shape, Table, TextFrame};
use crate::error::Result;
use crate::units::Emu;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation metadata stamped into `docProps/core.xml` and `app.xml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Presentation title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Author/creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// One of the seven slide layouts defined by the built-in template.
///
/// The discriminant order matches the template's layout parts:
/// `Title` is `ppt/slideLayouts/slideLayout1.xml`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideLayout {
    Title,
    TitleAndContent,
    SectionHeader,
    TwoContent,
    Comparison,
    TitleOnly,
    Blank,
}

impl SlideLayout {
    /// All layouts, in template order.
    pub const ALL: [SlideLayout; 7] = [
        SlideLayout::Title,
        SlideLayout::TitleAndContent,
        SlideLayout::SectionHeader,
        SlideLayout::TwoContent,
        SlideLayout::Comparison,
        SlideLayout::TitleOnly,
        SlideLayout::Blank,
    ];

    /// Zero-based layout index.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|l| *l == self).unwrap_or(0)
    }

    /// One-based number of the layout's package part.
    pub fn part_number(self) -> usize {
        self.index() + 1
    }

    /// Package part name (`ppt/slideLayouts/slideLayoutN.xml`).
    pub fn part_name(self) -> String {
        format!("ppt/slideLayouts/slideLayout{}.xml", self.part_number())
    }

    /// Display name, as shown in the layout gallery.
    pub fn name(self) -> &'static str {
        match self {
            SlideLayout::Title => "Title Slide",
            SlideLayout::TitleAndContent => "Title and Content",
            SlideLayout::SectionHeader => "Section Header",
            SlideLayout::TwoContent => "Two Content",
            SlideLayout::Comparison => "Comparison",
            SlideLayout::TitleOnly => "Title Only",
            SlideLayout::Blank => "Blank",
        }
    }
}

/// The content region a placeholder binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceholderKind {
    /// The slide title (centered title on the `Title` layout).
    Title,
    /// The subtitle region of the `Title` layout.
    Subtitle,
    /// A body region; `idx` 1 is the only/left body, 2 the right body
    /// of a `TwoContent` layout.
    Body { idx: u8 },
}

/// A populated content region on a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placeholder {
    /// Which layout region this fills
    pub kind: PlaceholderKind,

    /// The region's text
    pub frame: TextFrame,
}

/// A single slide: a layout plus the content placed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// The layout this slide instantiates
    pub layout: SlideLayout,

    /// Populated placeholders, in insertion order
    #[serde(default)]
    pub placeholders: Vec<Placeholder>,

    /// Auto shapes drawn on the slide
    #[serde(default)]
    pub shapes: Vec<Shape>,

    /// Tables drawn on the slide
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Slide {
    /// Create an empty slide on the given layout.
    pub fn new(layout: SlideLayout) -> Self {
        Self {
            layout,
            placeholders: Vec::new(),
            shapes: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Set a placeholder's text, replacing any earlier content for the
    /// same region.
    pub fn set_placeholder_text(&mut self, kind: PlaceholderKind, text: impl AsRef<str>) {
        let frame = TextFrame::from_text(text);
        if let Some(ph) = self.placeholders.iter_mut().find(|p| p.kind == kind) {
            ph.frame = frame;
        } else {
            self.placeholders.push(Placeholder { kind, frame });
        }
    }

    /// Set the slide title.
    pub fn set_title(&mut self, text: impl AsRef<str>) {
        self.set_placeholder_text(PlaceholderKind::Title, text);
    }

    /// Set the subtitle (Title layout).
    pub fn set_subtitle(&mut self, text: impl AsRef<str>) {
        self.set_placeholder_text(PlaceholderKind::Subtitle, text);
    }

    /// Set a body region's text.
    pub fn set_body_text(&mut self, idx: u8, text: impl AsRef<str>) {
        self.set_placeholder_text(PlaceholderKind::Body { idx }, text);
    }

    /// Get a placeholder's frame by kind.
    pub fn placeholder(&self, kind: PlaceholderKind) -> Option<&TextFrame> {
        self.placeholders
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| &p.frame)
    }

    /// The title text, if set.
    pub fn title(&self) -> Option<String> {
        self.placeholder(PlaceholderKind::Title)
            .map(|f| f.plain_text())
    }

    /// Add an auto shape to the slide.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Add a table to the slide.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the number of auto shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

/// An in-memory presentation: an ordered sequence of slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    /// Slide width in EMU
    pub slide_width: Emu,

    /// Slide height in EMU
    pub slide_height: Emu,

    /// Document metadata
    pub metadata: Metadata,

    /// Slides, in deck order
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation with the default 10" x 7.5" (4:3)
    /// slide size.
    pub fn new() -> Self {
        Self {
            slide_width: Emu::inches(10.0),
            slide_height: Emu::inches(7.5),
            metadata: Metadata::default(),
            slides: Vec::new(),
        }
    }

    /// Append a slide on the given layout and return it for population.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut Slide {
        self.slides.push(Slide::new(layout));
        self.slides.last_mut().expect("slide just pushed")
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::pptx::write_bytes(self)
    }

    /// Serialize the presentation to a `.pptx` file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        crate::pptx::write_file(self, path)
    }

    /// Convert the model to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
