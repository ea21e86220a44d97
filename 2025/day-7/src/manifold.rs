use aoc2025_common::Grid;
use miette::*;

/// Where the tachyon beam enters the manifold.
pub const START: char = 'S';
/// A splitter: the beam stops and continues from both sides.
pub const SPLITTER: char = '^';

/// A tachyon manifold: the diagram and the position of `S`.
pub struct Manifold {
    pub grid: Grid,
    pub start: (usize, usize),
}

impl Manifold {
    pub fn parse(input: &str) -> Result<Self> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find(START)
            .ok_or(miette!("No start position 'S' found in grid"))?;

        Ok(Self { grid, start })
    }

    fn is_splitter(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col) == Some(SPLITTER)
    }

    /// Number of distinct splitters the beam reaches.
    ///
    /// A beam moves down until it meets a splitter, a cell another beam
    /// already went through, or the bottom edge.
    pub fn count_splits(&self) -> usize {
        let cols = self.grid.cols();
        let mut visited = vec![false; self.grid.rows() * cols];
        let mut beams = vec![self.start];
        let mut splits = 0;

        while let Some((mut row, col)) = beams.pop() {
            while row < self.grid.rows() && !visited[row * cols + col] {
                visited[row * cols + col] = true;

                if self.is_splitter(row, col) {
                    splits += 1;
                    // New beams leave from the cells beside the splitter
                    if let Some(left) = col.checked_sub(1) {
                        beams.push((row, left));
                    }
                    if col + 1 < cols {
                        beams.push((row, col + 1));
                    }
                    break;
                }
                row += 1;
            }
        }

        splits
    }

    /// Number of timelines a single particle ends up in.
    ///
    /// Counted bottom-up: a column below every splitter is one timeline, a
    /// splitter is worth the sum of the columns beside it and leaving the
    /// manifold sideways is one timeline.
    pub fn count_timelines(&self) -> u128 {
        let (start_row, start_col) = self.start;
        let cols = self.grid.cols();
        let mut timelines: Vec<u128> = vec![1; cols];

        for row in (start_row..self.grid.rows()).rev() {
            for col in 0..cols {
                if self.is_splitter(row, col) {
                    let left = col.checked_sub(1).map_or(1, |left| timelines[left]);
                    let right = timelines.get(col + 1).copied().unwrap_or(1);
                    timelines[col] = left + right;
                }
            }
        }

        timelines[start_col]
    }
}
