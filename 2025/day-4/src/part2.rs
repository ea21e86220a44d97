use aoc2025_common::Grid;
use miette::*;

use crate::paper::erode;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut grid = Grid::parse(input)?;

    Ok(erode(&mut grid).to_string())
}
