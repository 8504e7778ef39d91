use crate::color::RandomColors;
use crate::extractor::{Word, WordExtractor};
use crate::grid::Grid;
use crate::Error;
use chrono::{NaiveDate, Utc};
use log::debug;
use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Background image used when none is configured.
pub const DEFAULT_BACKGROUND_IMAGE: &str =
    "https://raw.githubusercontent.com/saasify-sh/react-blobby-blob/master/media/blob.jpg";

/// Format of the document key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Supplies the date a document is stamped with.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The current UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always the same date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i64,
    pub height: i64,
}

/// The grid size, background and words of a single crossword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub size: Size,
    pub background_image: String,
    pub words: Vec<Word>,
}

/// A [Puzzle] stamped with a date.
///
/// Serializes as a map with the date as its only key:
/// ```text
/// { "2024-06-01": { "size": {..}, "backgroundImage": "..", "words": [..] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub date: NaiveDate,
    pub puzzle: Puzzle,
}

impl Document {
    /// The document key, `YYYY-MM-DD`.
    pub fn key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Pretty printed JSON, indented with 2 spaces.
    pub fn to_pretty_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from JSON.
    /// # Errors
    /// * The text is not valid JSON or a puzzle has missing fields
    /// * The top level object does not have exactly one key, or the key is not a date
    pub fn from_json(json: &str) -> Result<Document, Error> {
        let entries: BTreeMap<String, Puzzle> = serde_json::from_str(json)?;
        Document::from_entries(entries).map_err(Error::InvalidDocument)
    }

    fn from_entries(entries: BTreeMap<String, Puzzle>) -> Result<Document, String> {
        if entries.len() != 1 {
            return Err(format!("expected a single date key, found {}", entries.len()));
        }
        let (key, puzzle) = entries
            .into_iter()
            .next()
            .ok_or_else(|| String::from("empty document"))?;
        let date = NaiveDate::parse_from_str(&key, DATE_FORMAT)
            .map_err(|err| format!("key {:?} is not a date: {}", key, err))?;
        if date.format(DATE_FORMAT).to_string() != key {
            return Err(format!("key {:?} is not formatted as YYYY-MM-DD", key));
        }
        Ok(Document { date, puzzle })
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key(), &self.puzzle)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, Puzzle>::deserialize(deserializer)?;
        Document::from_entries(entries).map_err(de::Error::custom)
    }
}

/// Wraps a list of words into a dated [Document].
pub struct DocumentBuilder<C = SystemClock> {
    clock: C,
    background_image: String,
}

impl Default for DocumentBuilder<SystemClock> {
    fn default() -> Self {
        DocumentBuilder::new(SystemClock)
    }
}

impl<C: Clock> DocumentBuilder<C> {
    pub fn new(clock: C) -> Self {
        DocumentBuilder {
            clock,
            background_image: String::from(DEFAULT_BACKGROUND_IMAGE),
        }
    }

    /// Use another background image than [DEFAULT_BACKGROUND_IMAGE].
    pub fn with_background_image<S: Into<String>>(mut self, url: S) -> Self {
        self.background_image = url.into();
        self
    }

    /// Build a document for today. `width` and `height` are not checked.
    /// # Example
    /// ```
    /// # use chrono::NaiveDate;
    /// # use crossword_words::{DocumentBuilder, FixedClock};
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let doc = DocumentBuilder::new(FixedClock(date)).build(Vec::new(), 5, 5);
    /// assert_eq!(doc.key(), "2024-06-01");
    /// assert_eq!((doc.puzzle.size.width, doc.puzzle.size.height), (5, 5));
    /// ```
    pub fn build(&self, words: Vec<Word>, width: i64, height: i64) -> Document {
        let date = self.clock.today();
        debug!("document {} {}x{} with {} words", date, width, height, words.len());
        Document {
            date,
            puzzle: Puzzle {
                size: Size { width, height },
                background_image: self.background_image.clone(),
                words,
            },
        }
    }
}

/// Extract the words from `grid` with random colors and wrap them in a document for today.
pub fn crossword_document(grid: &Grid) -> Document {
    let words = WordExtractor::new(RandomColors::new()).extract(grid);
    DocumentBuilder::new(SystemClock).build(words, grid.width() as i64, grid.height() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FixedColor;
    use crate::extractor::Direction;

    fn june_first() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn words() -> Vec<Word> {
        let grid: Grid = "CAT\nA..\nR..".parse().unwrap();
        WordExtractor::new(FixedColor(String::from("#FCEB00"))).extract(&grid)
    }

    #[test]
    fn test_key_and_size() {
        let doc = DocumentBuilder::new(june_first()).build(words(), 5, 5);
        let value = serde_json::to_value(&doc).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        let puzzle = &object["2024-06-01"];
        assert_eq!(puzzle["size"], serde_json::json!({"width": 5, "height": 5}));
        assert_eq!(puzzle["backgroundImage"], DEFAULT_BACKGROUND_IMAGE);
        assert_eq!(puzzle["words"][1]["word"], "CAR");
        assert_eq!(puzzle["words"][1]["direction"], "down");
        assert_eq!(puzzle["words"][1]["startX"], 0);
    }

    #[test]
    fn test_size_passed_verbatim() {
        let doc = DocumentBuilder::new(june_first()).build(Vec::new(), -3, 0);
        assert_eq!(doc.puzzle.size, Size { width: -3, height: 0 });
        assert!(doc.puzzle.words.is_empty());
    }

    #[test]
    fn test_background_image() {
        let doc = DocumentBuilder::new(june_first())
            .with_background_image("https://example.com/bg.png")
            .build(Vec::new(), 1, 1);
        assert_eq!(doc.puzzle.background_image, "https://example.com/bg.png");
    }

    #[test]
    fn test_pretty_round_trip() {
        let doc = DocumentBuilder::new(june_first()).build(words(), 3, 3);
        let json = doc.to_pretty_json().unwrap();
        assert!(json.starts_with("{\n  \"2024-06-01\": {\n    \"size\": {"));
        let parsed = Document::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
        assert_eq!(parsed.puzzle.words[0].direction, Direction::Across);
    }

    #[test]
    fn test_invalid_documents() {
        let puzzle = r#"{"size": {"width": 1, "height": 1}, "backgroundImage": "", "words": []}"#;
        let two_keys = format!(r#"{{"2024-06-01": {0}, "2024-06-02": {0}}}"#, puzzle);
        let bad_key = format!(r#"{{"tomorrow": {}}}"#, puzzle);
        let unpadded_key = format!(r#"{{"2024-6-1": {}}}"#, puzzle);
        assert!(matches!(
            Document::from_json(&two_keys),
            Err(Error::InvalidDocument(_))
        ));
        assert!(matches!(
            Document::from_json(&bad_key),
            Err(Error::InvalidDocument(_))
        ));
        assert!(matches!(
            Document::from_json(&unpadded_key),
            Err(Error::InvalidDocument(_))
        ));
        assert!(serde_json::from_str::<Document>(&unpadded_key).is_err());
        assert!(matches!(
            Document::from_json("{}"),
            Err(Error::InvalidDocument(_))
        ));
        assert!(matches!(
            Document::from_json("[1, 2]"),
            Err(Error::Json(_))
        ));
        let single = format!(r#"{{"2024-06-01": {}}}"#, puzzle);
        assert!(Document::from_json(&single).is_ok());
        assert!(serde_json::from_str::<Document>(&bad_key).is_err());
    }

    #[test]
    fn test_system_clock() {
        let doc = crossword_document(&"AB".parse().unwrap());
        assert_eq!(doc.key(), Utc::now().date_naive().format(DATE_FORMAT).to_string());
        assert_eq!(doc.puzzle.size, Size { width: 2, height: 1 });
        assert_eq!(doc.puzzle.words.len(), 1);
    }
}
