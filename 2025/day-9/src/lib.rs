pub mod rectangle;
pub mod part1;
pub mod part2;
