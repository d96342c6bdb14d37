//! deckgen CLI - sample presentation generator
//!
//! Builds the fixed eight-slide sample deck and writes it to
//! `sample_presentation.pptx` in the working directory. Takes no
//! arguments; any failure propagates out of `main` and terminates the
//! process with a non-zero status.

use deckgen::sample;

fn main() -> deckgen::Result<()> {
    let deck = sample::build();
    deck.save(sample::OUTPUT_FILE)?;

    println!("Presentation created successfully!");
    println!("File saved as: {}", sample::OUTPUT_FILE);

    Ok(())
}
