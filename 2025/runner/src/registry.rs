//! Static table of every solver, keyed by day and part.

use clap::ValueEnum;
use itertools::Itertools;
use miette::*;
use std::fmt;

/// A solver turns the raw puzzle input into the answer.
pub type Solver = fn(&str) -> Result<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "part1"),
            Part::Two => write!(f, "part2"),
        }
    }
}

pub struct Registration {
    pub day: u8,
    pub part: Part,
    pub solve: Solver,
}

pub const SOLVERS: &[Registration] = &[
    Registration {
        day: 1,
        part: Part::One,
        solve: aoc2025_day_1::part1::process,
    },
    Registration {
        day: 1,
        part: Part::Two,
        solve: aoc2025_day_1::part2::process,
    },
    Registration {
        day: 2,
        part: Part::One,
        solve: aoc2025_day_2::part1::process,
    },
    Registration {
        day: 2,
        part: Part::Two,
        solve: aoc2025_day_2::part2::process,
    },
    Registration {
        day: 3,
        part: Part::One,
        solve: aoc2025_day_3::part1::process,
    },
    Registration {
        day: 3,
        part: Part::Two,
        solve: aoc2025_day_3::part2::process,
    },
    Registration {
        day: 4,
        part: Part::One,
        solve: aoc2025_day_4::part1::process,
    },
    Registration {
        day: 4,
        part: Part::Two,
        solve: aoc2025_day_4::part2::process,
    },
    Registration {
        day: 5,
        part: Part::One,
        solve: aoc2025_day_5::part1::process,
    },
    Registration {
        day: 5,
        part: Part::Two,
        solve: aoc2025_day_5::part2::process,
    },
    Registration {
        day: 6,
        part: Part::One,
        solve: aoc2025_day_6::part1::process,
    },
    Registration {
        day: 6,
        part: Part::Two,
        solve: aoc2025_day_6::part2::process,
    },
    Registration {
        day: 7,
        part: Part::One,
        solve: aoc2025_day_7::part1::process,
    },
    Registration {
        day: 7,
        part: Part::Two,
        solve: aoc2025_day_7::part2::process,
    },
    Registration {
        day: 8,
        part: Part::One,
        solve: aoc2025_day_8::part1::process,
    },
    Registration {
        day: 8,
        part: Part::Two,
        solve: aoc2025_day_8::part2::process,
    },
    Registration {
        day: 9,
        part: Part::One,
        solve: aoc2025_day_9::part1::process,
    },
    Registration {
        day: 9,
        part: Part::Two,
        solve: aoc2025_day_9::part2::process,
    },
];

pub fn lookup(day: u8, part: Part) -> Option<Solver> {
    SOLVERS
        .iter()
        .find(|r| r.day == day && r.part == part)
        .map(|r| r.solve)
}

/// Days with at least one registered solver, ascending.
pub fn days() -> Vec<u8> {
    SOLVERS.iter().map(|r| r.day).sorted().dedup().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const DAY_1: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82";
    const DAY_2: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124";
    const DAY_3: &str = "987654321111111\n811111111111119\n234234234234278\n818181911112111";
    const DAY_4: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
    const DAY_5: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32";
    const DAY_6: &str = "123 328  51 64 
 45 64  387 23 
  6 98  215 314
*   +   *   +  ";
    const DAY_7: &str = ".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............";
    const DAY_8: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";
    const DAY_9: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3";

    #[rstest]
    #[case(1, Part::One, DAY_1, "3")]
    #[case(1, Part::Two, DAY_1, "6")]
    #[case(2, Part::One, DAY_2, "1227775554")]
    #[case(2, Part::Two, DAY_2, "4174379265")]
    #[case(3, Part::One, DAY_3, "357")]
    #[case(3, Part::Two, DAY_3, "3121910778619")]
    #[case(4, Part::One, DAY_4, "13")]
    #[case(4, Part::Two, DAY_4, "43")]
    #[case(5, Part::One, DAY_5, "3")]
    #[case(5, Part::Two, DAY_5, "14")]
    #[case(6, Part::One, DAY_6, "4277556")]
    #[case(6, Part::Two, DAY_6, "3263827")]
    #[case(7, Part::One, DAY_7, "21")]
    #[case(7, Part::Two, DAY_7, "40")]
    // 1000 connections exceed the 190 sample pairs, leaving one circuit of 20
    #[case(8, Part::One, DAY_8, "20")]
    #[case(8, Part::Two, DAY_8, "25272")]
    #[case(9, Part::One, DAY_9, "50")]
    #[case(9, Part::Two, DAY_9, "24")]
    fn registered_solvers_answer_examples(
        #[case] day: u8,
        #[case] part: Part,
        #[case] input: &str,
        #[case] expected: &str,
    ) -> Result<()> {
        let solve = lookup(day, part).ok_or(miette!("day {day} {part} is not registered"))?;

        let first = solve(input)?;
        // Solvers keep no state between calls
        let second = solve(input)?;

        assert_eq!(expected, first);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn every_day_has_both_parts() {
        assert_eq!(days(), (1..=9).collect::<Vec<u8>>());
        for day in days() {
            for part in Part::ALL {
                assert!(lookup(day, part).is_some(), "day {day} {part} missing");
            }
        }
    }

    #[test]
    fn unknown_day_has_no_solver() {
        assert!(lookup(25, Part::One).is_none());
    }

    #[test]
    fn parts_display_as_output_labels() {
        assert_eq!(Part::One.to_string(), "part1");
        assert_eq!(Part::Two.to_string(), "part2");
    }
}
