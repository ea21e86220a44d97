use miette::*;

use crate::circuits::{connect_closest, parse_points};

/// How many of the shortest connections get wired up.
pub const CONNECTIONS: usize = 1000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with_limit(input, CONNECTIONS)
}

/// Product of the three largest circuits after the `limit` shortest connections.
#[tracing::instrument]
pub fn process_with_limit(input: &str, limit: usize) -> Result<String> {
    let points = parse_points(input)?;

    let sizes = connect_closest(&points, limit).sizes();
    if sizes.is_empty() {
        return Ok("0".to_string());
    }

    let result: usize = sizes.iter().take(3).product();

    Ok(result.to_string())
}
