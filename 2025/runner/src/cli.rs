use clap::Parser;
use std::path::PathBuf;

use crate::registry::Part;

#[derive(Debug, Parser)]
#[command(name = "aoc2025", version, about = "Runs the Advent of Code 2025 solvers")]
pub struct Args {
    /// The day to run
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// The part to run, both if omitted
    #[arg(short, long, value_enum)]
    pub part: Option<Part>,

    /// Directory holding one `day<DAY>/input.txt` per day
    #[arg(short, long, env = "AOC_INPUTS_DIR", default_value = "inputs")]
    pub inputs: PathBuf,
}

impl Args {
    pub fn input_path(&self) -> PathBuf {
        self.inputs
            .join(format!("day{}", self.day))
            .join("input.txt")
    }

    pub fn parts(&self) -> Vec<Part> {
        match self.part {
            Some(part) => vec![part],
            None => Part::ALL.to_vec(),
        }
    }
}
