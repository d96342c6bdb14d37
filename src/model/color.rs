//! Solid RGB colors for fills and text.

use serde::{Deserialize, Serialize};

/// An RGB color triple.
///
/// Serialized into DrawingML as an uppercase `RRGGBB` hex string
/// (`<a:srgbClr val="4472C4"/>`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White, the header-row font color.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Hex representation without a leading `#`, as DrawingML expects.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
