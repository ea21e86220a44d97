pub mod intervals;
pub mod inventory;
pub mod part1;
pub mod part2;
