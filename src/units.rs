//! Length units for slide geometry.
//!
//! OOXML positions and sizes everything in English Metric Units (EMU):
//! 914,400 EMU per inch, 12,700 EMU per point. The model stores EMU and
//! converts from physical units at construction time.

use serde::{Deserialize, Serialize};

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMUs per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    /// Create a length from inches.
    pub fn inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH as f64).round() as i64)
    }

    /// Create a length from points.
    pub fn points(points: f64) -> Self {
        Emu((points * EMU_PER_POINT as f64).round() as i64)
    }

    /// Raw EMU value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::ops::Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Emu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversion() {
        assert_eq!(Emu::inches(1.0).value(), 914_400);
        assert_eq!(Emu::inches(2.0).value(), 1_828_800);
        assert_eq!(Emu::inches(2.5).value(), 2_286_000);
        assert_eq!(Emu::inches(7.5).value(), 6_858_000);
    }

    #[test]
    fn test_point_conversion() {
        assert_eq!(Emu::points(1.0).value(), 12_700);
        assert_eq!(Emu::points(18.0).value(), 228_600);
    }

    #[test]
    fn test_add() {
        assert_eq!(Emu::inches(1.0) + Emu::inches(2.5), Emu::inches(3.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Emu::inches(1.0).to_string(), "914400");
    }
}
