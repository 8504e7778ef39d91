use anyhow::Result;
use crossword_words::{crossword_document, Grid};

fn main() -> Result<()> {
    let grid: Grid = "SPACE\nA.R.X\nTREE.\n..A..".parse()?;
    let doc = crossword_document(&grid);
    println!("{}", doc.to_pretty_json()?);
    Ok(())
}
