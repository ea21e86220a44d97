use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    #[error("no solver registered for day {day}")]
    #[diagnostic(code(aoc2025::unknown_day))]
    UnknownDay {
        day: u8,
        #[help]
        registered: String,
    },

    #[error("failed to read input file {}", .path.display())]
    #[diagnostic(
        code(aoc2025::unreadable_input),
        help("inputs are read from <INPUTS>/day<DAY>/input.txt")
    )]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    pub fn unknown_day(day: u8, registered: &[u8]) -> Self {
        let registered = registered
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        RunnerError::UnknownDay {
            day,
            registered: format!("registered days: {registered}"),
        }
    }
}
