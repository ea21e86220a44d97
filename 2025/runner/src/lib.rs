//! Loads a day's puzzle input and runs its registered solvers.

pub mod cli;
pub mod error;
pub mod registry;

use miette::*;
use std::fs;

use crate::cli::Args;
use crate::error::RunnerError;
use crate::registry::Part;

/// Runs the requested parts of one day, handing each answer to `report` as
/// soon as its solver returns.
///
/// The day is resolved before the input is read, so an unknown day is
/// reported even when its input file is missing. A failing part stops the
/// run, but the answers reported before it stand.
#[tracing::instrument(skip(args, report), fields(day = args.day))]
pub fn run(args: &Args, mut report: impl FnMut(Part, &str)) -> Result<()> {
    let solvers = args
        .parts()
        .into_iter()
        .map(|part| {
            registry::lookup(args.day, part)
                .map(|solve| (part, solve))
                .ok_or_else(|| RunnerError::unknown_day(args.day, &registry::days()))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let path = args.input_path();
    tracing::debug!(path = %path.display(), "reading input");
    let input = fs::read_to_string(&path)
        .map_err(|source| RunnerError::UnreadableInput { path, source })?;

    for (part, solve) in solvers {
        let answer = solve(&input).wrap_err_with(|| format!("day {} {part} failed", args.day))?;
        report(part, &answer);
    }

    Ok(())
}
