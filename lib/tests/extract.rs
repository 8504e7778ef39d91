use anyhow::Result;
use chrono::NaiveDate;
use crossword_words::{
    extract_words, CycleColors, Direction, Document, DocumentBuilder, FixedClock, Grid,
    WordExtractor,
};

fn june_first() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn test_document_from_file(grid_path: &str, expect: &str) -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let grid = Grid::from_file(grid_path)?;
    let words = WordExtractor::new(CycleColors::default()).extract(&grid);
    let doc = DocumentBuilder::new(june_first()).build(
        words,
        grid.width() as i64,
        grid.height() as i64,
    );
    let json = doc.to_pretty_json()?;
    println!("{}\n\n{}", grid, json);
    assert_eq!(json, expect.trim_end());
    Ok(())
}

#[test]
fn test_text_grid() -> Result<()> {
    test_document_from_file("tests/crossword.txt", include_str!("crossword.expect"))
}

#[test]
fn test_json_grid() -> Result<()> {
    test_document_from_file("tests/crossword.json", include_str!("crossword.expect"))
}

#[test]
fn test_round_trip() -> Result<()> {
    let expect = include_str!("crossword.expect");
    let doc = Document::from_json(expect)?;
    assert_eq!(doc.key(), "2024-06-01");
    let words: Vec<_> = doc
        .puzzle
        .words
        .iter()
        .map(|w| (w.word.as_str(), w.direction))
        .collect();
    assert_eq!(
        words,
        vec![
            ("SPACE", Direction::Across),
            ("TREE", Direction::Across),
            ("SAT", Direction::Down),
            ("AREA", Direction::Down),
            ("EX", Direction::Down),
        ]
    );
    let reparsed = Document::from_json(&doc.to_pretty_json()?)?;
    assert_eq!(reparsed, doc);
    Ok(())
}

#[test]
fn test_malformed_json_grids() -> Result<()> {
    for input in &["null", "42", r#""CAT""#, "{}", "[]", "[[]]", r#"[[""], [""]]"#] {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let grid = Grid::from_value(&value);
        assert!(extract_words(&grid).is_empty(), "{}", input);
    }
    Ok(())
}

#[test]
fn test_missing_file() {
    assert!(Grid::from_file("tests/no_such_grid.txt").is_err());
}
