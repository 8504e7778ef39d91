//! A library that finds the words in a crossword grid
//!
//! This library scans every row and column of a grid for runs of filled cells, and wraps the words
//! it finds in a dated JSON document together with the grid size and a background image.
//!
//! # Basic usage
//! ```
//! # use crossword_words::{Error, Grid, WordExtractor, DocumentBuilder, RandomColors, SystemClock};
//! let grid: Grid = "CAT.\n.R..\n.MAP".parse().unwrap();
//! let words = WordExtractor::new(RandomColors::new()).extract(&grid);
//! let doc = DocumentBuilder::new(SystemClock).build(words, grid.width() as i64, grid.height() as i64);
//! println!("{}", doc.to_pretty_json()?);
//! # Ok::<(), Error>(())
//! ```
//! The words are listed across first, row by row, then down, column by column:
//!
//! ```text
//! CAT   across (0, 0)
//! MAP   across (1, 2)
//! ARM   down   (1, 0)
//! ```
//!
//! Single letters are not words and are skipped. Extraction never fails: an empty or malformed grid
//! simply has no words.

mod color;
mod document;
mod error;
mod extractor;
mod grid;

pub use color::{ColorPicker, CycleColors, FixedColor, RandomColors, PALETTE};
pub use document::{
    crossword_document, Clock, Document, DocumentBuilder, FixedClock, Puzzle, Size, SystemClock,
    DATE_FORMAT, DEFAULT_BACKGROUND_IMAGE,
};
pub use error::Error;
pub use extractor::{extract_words, Direction, Word, WordExtractor, START_AT};
pub use grid::{Grid, BLOCKED};
