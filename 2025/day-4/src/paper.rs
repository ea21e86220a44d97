use aoc2025_common::Grid;

/// A roll of paper.
pub const ROLL: char = '@';
/// An empty spot, left behind when a roll is taken away.
pub const EMPTY: char = '.';

/// A forklift can reach a roll with fewer than this many rolls around it.
const MAX_CROWDING: usize = 4;

/// Whether the roll at `(row, col)` can be reached by a forklift.
pub fn is_accessible(grid: &Grid, row: usize, col: usize) -> bool {
    grid.get(row, col) == Some(ROLL)
        && grid
            .neighbor_values(row, col)
            .filter(|&c| c == ROLL)
            .count()
            < MAX_CROWDING
}

/// Counts the accessible rolls without touching the grid.
pub fn count_accessible(grid: &Grid) -> usize {
    grid.coords()
        .filter(|&(row, col)| is_accessible(grid, row, col))
        .count()
}

/// One row-major pass that removes accessible rolls as it meets them.
///
/// A removal is visible to every cell visited later in the same pass.
pub fn erode_once(grid: &mut Grid) -> usize {
    let mut removed = 0;
    for (row, col) in grid.coords() {
        if is_accessible(grid, row, col) {
            grid.set(row, col, EMPTY);
            removed += 1;
        }
    }
    removed
}

/// Repeats [`erode_once`] until a pass removes nothing and returns the total.
pub fn erode(grid: &mut Grid) -> usize {
    let mut total_removed = 0;
    loop {
        let removed = erode_once(grid);
        if removed == 0 {
            break;
        }
        tracing::debug!(removed, "erosion round");
        total_removed += removed;
    }
    total_removed
}

#[cfg(test)]
mod tests {
    use super::*;

    use miette::Result;
    use rstest::rstest;

    const SAMPLE: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";

    #[test]
    fn erosion_is_idempotent() -> Result<()> {
        let mut grid = Grid::parse(SAMPLE)?;
        assert_eq!(erode(&mut grid), 43);

        let eroded = grid.clone();
        assert_eq!(erode(&mut grid), 0);
        assert_eq!(grid, eroded);
        assert_eq!(count_accessible(&grid), 0);
        Ok(())
    }

    #[test]
    fn total_matches_rolls_that_disappeared() -> Result<()> {
        let mut grid = Grid::parse(SAMPLE)?;
        let rolls = |g: &Grid| g.coords().filter(|&(r, c)| g.get(r, c) == Some(ROLL)).count();

        let before = rolls(&grid);
        let removed = erode(&mut grid);
        assert_eq!(before - rolls(&grid), removed);
        Ok(())
    }

    #[rstest]
    #[case("@", 1, 1)]
    #[case("...\n...", 0, 0)]
    #[case("@@@\n@@@\n@@@", 4, 4)]
    // Only the four corners qualify up front, but once they go the
    // bottom-middle roll is down to two neighbours within the same pass
    #[case("@@@\n@@@", 4, 5)]
    fn removals_apply_within_the_pass(
        #[case] input: &str,
        #[case] accessible: usize,
        #[case] removed: usize,
    ) -> Result<()> {
        let mut grid = Grid::parse(input)?;
        assert_eq!(count_accessible(&grid), accessible);
        assert_eq!(erode_once(&mut grid), removed);
        Ok(())
    }

    #[test]
    fn pass_leaves_the_shielded_roll() -> Result<()> {
        let mut grid = Grid::parse("@@@\n@@@")?;
        erode_once(&mut grid);
        assert_eq!(grid, Grid::parse(".@.\n...")?);
        Ok(())
    }
}
