//! The built-in sample deck.
//!
//! Eight slides exercising the seven layouts, auto shapes, and tables,
//! assembled in a fixed order. Apart from the date line on the first slide
//! the content is fully deterministic.

use crate::model::{Color, Presentation, Row, Shape, ShapeKind, SlideLayout, Table};
use crate::units::Emu;
use chrono::Local;

/// File name the sample deck is saved under.
pub const OUTPUT_FILE: &str = "sample_presentation.pptx";

/// Build the sample presentation.
pub fn build() -> Presentation {
    let mut pres = Presentation::new();
    pres.metadata.title = Some("Sample Presentation".to_string());
    pres.metadata.author = Some("deckgen".to_string());

    // Slide 1: Title
    let slide = pres.add_slide(SlideLayout::Title);
    slide.set_title("Sample Presentation");
    slide.set_subtitle(format!(
        "Created with Python\n{}",
        Local::now().format("%B %d, %Y")
    ));

    // Slide 2: Introduction
    let slide = pres.add_slide(SlideLayout::TitleAndContent);
    slide.set_title("Introduction");
    slide.set_body_text(
        1,
        "Welcome to this sample presentation!\n\n\
         This presentation demonstrates:\n\
         • Various slide layouts\n\
         • Text formatting\n\
         • Shapes and graphics\n\
         • Charts and tables",
    );

    // Slide 3: Section header
    let slide = pres.add_slide(SlideLayout::SectionHeader);
    slide.set_title("Key Features");
    slide.set_body_text(1, "Exploring PowerPoint capabilities with Python");

    // Slide 4: Two-column comparison of benefits
    let slide = pres.add_slide(SlideLayout::TwoContent);
    slide.set_title("Benefits of Automated Presentations");
    slide.set_body_text(
        1,
        "Efficiency\n\n\
         • Save time\n\
         • Reduce errors\n\
         • Consistent formatting\n\
         • Easy updates",
    );
    slide.set_body_text(
        2,
        "Flexibility\n\n\
         • Data-driven content\n\
         • Dynamic generation\n\
         • Version control\n\
         • Batch processing",
    );

    // Slide 5: Manually placed shapes
    let slide = pres.add_slide(SlideLayout::TitleOnly);
    slide.set_title("Visual Elements");

    let left = Emu::inches(1.0);
    let top = Emu::inches(2.0);
    let size = Emu::inches(2.0);

    slide.add_shape(
        Shape::new(ShapeKind::Rectangle, left, top, size, size, Color::rgb(0, 112, 192))
            .with_text("Rectangle"),
    );
    slide.add_shape(
        Shape::new(
            ShapeKind::Oval,
            left + Emu::inches(2.5),
            top,
            size,
            size,
            Color::rgb(112, 173, 71),
        )
        .with_text("Circle"),
    );
    slide.add_shape(
        Shape::new(
            ShapeKind::RightArrow,
            left + Emu::inches(5.0),
            top,
            size,
            size,
            Color::rgb(255, 192, 0),
        )
        .with_text("Arrow"),
    );

    // Slide 6: Data table
    let slide = pres.add_slide(SlideLayout::TitleOnly);
    slide.set_title("Data Table Example");

    let header_fill = Color::rgb(68, 114, 196);
    let mut table = Table::new(
        Emu::inches(1.5),
        Emu::inches(2.0),
        Emu::inches(6.0),
        Emu::inches(3.0),
        vec![Emu::inches(2.0); 3],
    );
    table.add_row(Row::header(["Category", "Q1 Results", "Q2 Results"], header_fill));
    for data in [
        ["Product A", "85%", "92%"],
        ["Product B", "78%", "81%"],
        ["Product C", "91%", "88%"],
    ] {
        table.add_row(Row::from_texts(data));
    }
    slide.add_table(table);

    // Slide 7: Conclusion
    let slide = pres.add_slide(SlideLayout::TitleAndContent);
    slide.set_title("Conclusion");
    slide.set_body_text(
        1,
        "Key Takeaways:\n\n\
         ✓ Python-pptx enables automated presentation creation\n\
         ✓ Supports various layouts and formatting options\n\
         ✓ Can include shapes, tables, and other visual elements\n\
         ✓ Perfect for data-driven presentations\n\n\
         Thank you!",
    );

    // Slide 8: Closing
    let slide = pres.add_slide(SlideLayout::Title);
    slide.set_title("Questions?");
    slide.set_subtitle("Thank you for your attention");

    pres
}
