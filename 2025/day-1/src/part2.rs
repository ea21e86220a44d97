use miette::*;

use crate::dial::{parse_rotations, Dial};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parse_rotations(input)?;

    let mut dial = Dial::default();
    let total_hits: i64 = rotations.into_iter().map(|r| dial.turn(r)).sum();

    Ok(total_hits.to_string())
}
