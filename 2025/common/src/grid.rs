use itertools::iproduct;
use miette::*;

/// Offsets of the eight surrounding cells, row by row from the top-left.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular field of ASCII characters stored row-major in a flat buffer.
///
/// The dimensions are fixed at construction; `cells.len() == rows * cols` holds
/// for the whole lifetime of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Builds a grid from newline separated rows of equal width.
    ///
    /// Trailing blank lines (and `\r` from CRLF input) are ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect::<Vec<_>>();

        // Filter out trailing empty rows caused by a newline at EOF
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let cols = match lines.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(miette!("Empty input")),
        };

        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(miette!(
                    "Row {} has width {}, expected {}",
                    row,
                    line.len(),
                    cols
                ));
            }
            cells.extend_from_slice(line.as_bytes());
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the character at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col] as char)
    }

    /// Overwrites a single cell.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the grid or `value` is not ASCII.
    pub fn set(&mut self, row: usize, col: usize, value: char) {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) is outside a {}x{} grid",
            self.rows,
            self.cols
        );
        assert!(value.is_ascii(), "grid cells hold ASCII only");
        self.cells[row * self.cols + col] = value as u8;
    }

    /// Every `(row, col)` pair in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + Clone {
        iproduct!(0..self.rows, 0..self.cols)
    }

    /// Positions of the up to eight cells around `(row, col)`, clipped to the grid.
    pub fn neighbor_positions(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(d_row, d_col)| {
            let n_row = row.checked_add_signed(d_row)?;
            let n_col = col.checked_add_signed(d_col)?;
            (n_row < self.rows && n_col < self.cols).then_some((n_row, n_col))
        })
    }

    /// Characters of the cells returned by [`Grid::neighbor_positions`].
    pub fn neighbor_values(&self, row: usize, col: usize) -> impl Iterator<Item = char> + '_ {
        self.neighbor_positions(row, col)
            .filter_map(|(n_row, n_col)| self.get(n_row, n_col))
    }

    /// First position holding `value`, scanning row-major.
    pub fn find(&self, value: char) -> Option<(usize, usize)> {
        let idx = self.cells.iter().position(|&c| c as char == value)?;
        Some((idx / self.cols, idx % self.cols))
    }
}
