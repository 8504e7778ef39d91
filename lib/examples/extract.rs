use anyhow::{Context, Result};
use crossword_words::{DocumentBuilder, Grid, RandomColors, SystemClock, WordExtractor};
use std::time::Instant;

fn run() -> Result<()> {
    let path = std::env::args().nth(1).expect("Usage: extract GRID");
    let t0 = Instant::now();
    let grid = Grid::from_file(&path).with_context(|| format!("Failed to read {}", path))?;
    eprintln!("grid {}x{}:\n{}", grid.width(), grid.height(), grid);

    let words = WordExtractor::new(RandomColors::new()).extract(&grid);
    for word in words.iter() {
        eprintln!("  {:8} {:6} ({}, {})", word.word, word.direction, word.start_x, word.start_y);
    }
    let doc = DocumentBuilder::new(SystemClock).build(words, grid.width() as i64, grid.height() as i64);
    eprintln!("extract took {:?}", t0.elapsed());
    println!("{}", doc.to_pretty_json()?);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
