pub mod joltage;
pub mod part1;
pub mod part2;
