pub mod paper;
pub mod part1;
pub mod part2;
