use crate::color::{ColorPicker, RandomColors};
use crate::grid::Grid;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of [Word::start_at] for a freshly extracted word.
pub const START_AT: &str = "00:00";

/// Word orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Across => f.pad("across"),
            Direction::Down => f.pad("down"),
        }
    }
}

/// A word found in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub word: String,
    /// Column of the first letter
    pub start_x: usize,
    /// Row of the first letter
    pub start_y: usize,
    pub direction: Direction,
    pub audio_url: String,
    pub start_at: String,
    /// Highlight color, `#RRGGBB`
    pub color: String,
    pub text_clue: String,
}

impl Word {
    /// A word with empty audio url and clue, starting at [START_AT].
    pub fn new(
        word: String,
        start_x: usize,
        start_y: usize,
        direction: Direction,
        color: String,
    ) -> Word {
        Word {
            word,
            start_x,
            start_y,
            direction,
            audio_url: String::new(),
            start_at: String::from(START_AT),
            color,
            text_clue: String::new(),
        }
    }

    /// Number of characters in the word.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// State of the scan along a single row or column.
#[derive(Debug, PartialEq)]
enum Scan {
    Blocked,
    InRun { start: usize, letters: String },
}

/// Extracts the across and down words from a [Grid].
///
/// A word is a run of two or more consecutive filled cells in a row (across) or a column (down).
pub struct WordExtractor<P> {
    colors: P,
}

impl Default for WordExtractor<RandomColors> {
    fn default() -> Self {
        WordExtractor::new(RandomColors::new())
    }
}

impl<P: ColorPicker> WordExtractor<P> {
    pub fn new(colors: P) -> Self {
        WordExtractor { colors }
    }

    /// Return all words in the grid.
    ///
    /// The across words come first, row by row, followed by the down words, column by column.
    /// An empty grid, or a grid with an empty first row, gives no words.
    /// # Example
    /// ```
    /// # use crossword_words::{Direction, FixedColor, Grid, WordExtractor};
    /// let grid: Grid = "CAT.\n....\nDOG.".parse().unwrap();
    /// let mut extractor = WordExtractor::new(FixedColor("#FFCEFD".into()));
    /// let words = extractor.extract(&grid);
    /// assert_eq!(words.len(), 2);
    /// assert_eq!(words[1].word, "DOG");
    /// assert_eq!((words[1].start_x, words[1].start_y), (0, 2));
    /// assert_eq!(words[1].direction, Direction::Across);
    /// ```
    pub fn extract(&mut self, grid: &Grid) -> Vec<Word> {
        let mut words = self.across(grid);
        words.extend(self.down(grid));
        words
    }

    /// Return the across words, row by row.
    pub fn across(&mut self, grid: &Grid) -> Vec<Word> {
        let mut words = Vec::new();
        let width = grid.width();
        for row in 0..grid.height() {
            let cells = (0..width).map(|col| grid.cell(row, col));
            self.scan_line(Direction::Across, row, cells, &mut words);
        }
        words
    }

    /// Return the down words, column by column.
    pub fn down(&mut self, grid: &Grid) -> Vec<Word> {
        let mut words = Vec::new();
        let height = grid.height();
        for col in 0..grid.width() {
            let cells = (0..height).map(|row| grid.cell(row, col));
            self.scan_line(Direction::Down, col, cells, &mut words);
        }
        words
    }

    fn scan_line<'a, I>(
        &mut self,
        direction: Direction,
        line: usize,
        cells: I,
        words: &mut Vec<Word>,
    ) where
        I: Iterator<Item = Option<&'a str>>,
    {
        let mut state = Scan::Blocked;
        for (i, cell) in cells.enumerate() {
            state = match (state, cell) {
                (Scan::Blocked, Some(letter)) => Scan::InRun {
                    start: i,
                    letters: letter.to_string(),
                },
                (Scan::InRun { start, mut letters }, Some(letter)) => {
                    letters.push_str(letter);
                    Scan::InRun { start, letters }
                }
                (Scan::InRun { start, letters }, None) => {
                    self.emit(direction, line, start, letters, words);
                    Scan::Blocked
                }
                (Scan::Blocked, None) => Scan::Blocked,
            };
        }
        if let Scan::InRun { start, letters } = state {
            self.emit(direction, line, start, letters, words);
        }
    }

    fn emit(
        &mut self,
        direction: Direction,
        line: usize,
        start: usize,
        letters: String,
        words: &mut Vec<Word>,
    ) {
        let (x, y) = match direction {
            Direction::Across => (start, line),
            Direction::Down => (line, start),
        };
        if letters.chars().count() < 2 {
            trace!("skip single letter {:?} at ({}, {}) {}", letters, x, y, direction);
            return;
        }
        debug!("{} at ({}, {}) {}", letters, x, y, direction);
        let color = self.colors.pick_color();
        words.push(Word::new(letters, x, y, direction, color));
    }
}

/// Extract all words from `grid`, with random highlight colors.
pub fn extract_words(grid: &Grid) -> Vec<Word> {
    WordExtractor::new(RandomColors::new()).extract(grid)
}
