//! # deckgen
//!
//! PowerPoint presentation generation in pure Rust.
//!
//! This library provides an in-memory slide deck model and a writer that
//! serializes it to the Office Open XML (.pptx) package format, including
//! a built-in default template with the seven standard slide layouts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use deckgen::{Presentation, SlideLayout};
//!
//! let mut pres = Presentation::new();
//!
//! let slide = pres.add_slide(SlideLayout::Title);
//! slide.set_title("Hello");
//! slide.set_subtitle("From Rust");
//!
//! pres.save("hello.pptx")?;
//! # Ok::<(), deckgen::Error>(())
//! ```
//!
//! ## The sample deck
//!
//! The crate ships the fixed eight-slide sample presentation that the
//! `deckgen` binary writes:
//!
//! ```no_run
//! let deck = deckgen::sample::build();
//! deck.save(deckgen::sample::OUTPUT_FILE)?;
//! # Ok::<(), deckgen::Error>(())
//! ```

pub mod container;
pub mod error;
pub mod model;
pub mod pptx;
pub mod sample;
pub mod units;

// Re-exports
pub use error::{Error, Result};
pub use model::{
    Cell, Color, Metadata, Paragraph, Placeholder, PlaceholderKind, Presentation, Row, Shape,
    ShapeKind, Slide, SlideLayout, Table, TextFrame, TextRun, TextStyle,
};
pub use units::Emu;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_reopen() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::TitleOnly).set_title("Smoke");

        let bytes = pres.to_bytes().unwrap();
        assert!(!bytes.is_empty());

        let cursor = std::io::Cursor::new(bytes);
        let archive = zip::ZipArchive::new(cursor).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"[Content_Types].xml"));
        assert!(names.contains(&"ppt/presentation.xml"));
        assert!(names.contains(&"ppt/slides/slide1.xml"));
    }

    #[test]
    fn test_model_to_json() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Blank);
        let json = pres.to_json().unwrap();
        assert!(json.contains("Blank"));
    }
}
