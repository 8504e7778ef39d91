use crate::Error;
use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;

/// Characters that mark a blocked cell in the text form of a grid.
pub const BLOCKED: [char; 4] = ['.', '#', '_', ' '];

/// A crossword grid, organized as rows of cells.
///
/// A cell holds a letter (or a multi-letter tile like `"CH"`), an empty string is a blocked cell.
/// The grid is not required to be rectangular: cells past the end of a short row read as blocked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid(pub Vec<Vec<String>>);

impl Deref for Grid {
    type Target = Vec<Vec<String>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Grid(rows)
    }
}

impl Grid {
    /// Number of columns, taken from the first row.
    pub fn width(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.len()
    }

    /// Returns the content of a filled cell, `None` for a blocked or out of bounds cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
    }

    /// Build a grid from an arbitrary JSON value.
    ///
    /// This never fails: a value that is not an array gives an empty grid, a row that is not an array
    /// gives an empty row, and a cell that is not a string is blocked.
    /// Numbers and booleans are not turned into letters: `["A", 1, "B"]` has no word.
    pub fn from_value(value: &Value) -> Grid {
        let rows = match value.as_array() {
            Some(rows) => rows,
            None => {
                warn!("grid is not an array, using an empty grid");
                return Grid::default();
            }
        };
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| match row.as_array() {
                Some(cells) => cells
                    .iter()
                    .map(|cell| cell.as_str().unwrap_or_default().to_string())
                    .collect(),
                None => {
                    warn!("row {} is not an array, using an empty row", i);
                    Vec::new()
                }
            })
            .collect();
        Grid(rows)
    }

    /// Read a grid from a file.
    ///
    /// A file that starts with `[` is read as JSON, anything else as the text form (see [FromStr]).
    /// # Errors
    /// If the file can not be read, or it is not valid JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Grid, Error> {
        let text = fs::read_to_string(path)?;
        if text.trim_start().starts_with('[') {
            let value: Value = serde_json::from_str(&text)?;
            Ok(Grid::from_value(&value))
        } else {
            Ok(text.parse().unwrap_or_default())
        }
    }
}

impl<'de> Deserialize<'de> for Grid {
    /// Deserialize from an array of rows, where a cell is a string or `null` (blocked).
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Option<String>>>::deserialize(deserializer)?;
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
            .collect();
        Ok(Grid(rows))
    }
}

/// Parse the text form of a grid: one line per row, one character per cell.
///
/// `.`, `#`, `_` and space are blocked cells. Trailing empty lines are ignored.
/// ```
/// # use crossword_words::Grid;
/// let grid: Grid = "CAT.\n....\nDOG.".parse().unwrap();
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.cell(2, 1), Some("O"));
/// assert_eq!(grid.cell(1, 1), None);
/// ```
impl FromStr for Grid {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<String>> = s
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| {
                        if BLOCKED.contains(&c) {
                            String::new()
                        } else {
                            c.to_string()
                        }
                    })
                    .collect()
            })
            .collect();
        while rows.last().map_or(false, Vec::is_empty) {
            rows.pop();
        }
        Ok(Grid(rows))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grid_string = self
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_empty() { "." } else { cell.as_str() })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", grid_string)
    }
}
