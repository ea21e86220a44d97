use miette::*;

use crate::rectangle::{largest, parse_points};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    let max_area = largest(&points).map_or(0, |r| r.area());

    Ok(max_area.to_string())
}
