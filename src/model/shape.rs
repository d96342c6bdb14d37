//! Auto shape model: geometric primitives placed at absolute offsets.

use super::Color;
use crate::units::Emu;
use serde::{Deserialize, Serialize};

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Oval,
    RightArrow,
}

impl ShapeKind {
    /// DrawingML preset geometry name (`<a:prstGeom prst="..."/>`).
    pub fn preset(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::Oval => "ellipse",
            ShapeKind::RightArrow => "rightArrow",
        }
    }

    /// Display name used for the shape's `name` attribute.
    pub fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Oval => "Oval",
            ShapeKind::RightArrow => "Right Arrow",
        }
    }
}

/// A freeform drawable shape with position, size, solid fill, and an
/// optional text label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Preset geometry
    pub kind: ShapeKind,

    /// Offset from the left edge of the slide
    pub left: Emu,

    /// Offset from the top edge of the slide
    pub top: Emu,

    /// Shape width
    pub width: Emu,

    /// Shape height
    pub height: Emu,

    /// Solid fill color
    pub fill: Color,

    /// Text label centered in the shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Shape {
    /// Create a shape at the given position and size.
    pub fn new(kind: ShapeKind, left: Emu, top: Emu, width: Emu, height: Emu, fill: Color) -> Self {
        Self {
            kind,
            left,
            top,
            width,
            height,
            fill,
            text: None,
        }
    }

    /// Set the text label.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}
