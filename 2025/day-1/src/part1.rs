use miette::*;

use crate::dial::{parse_rotations, Dial};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parse_rotations(input)?;

    let zero_hits = rotations
        .iter()
        // scan maintains the dial through the iterator
        .scan(Dial::default(), |dial, &rotation| {
            dial.turn(rotation);
            Some(dial.position())
        })
        .filter(|&pos| pos == 0)
        .count();

    Ok(zero_hits.to_string())
}
