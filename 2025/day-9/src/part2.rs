use miette::*;

use crate::rectangle::{largest_enclosed, parse_points};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    let rectangle = largest_enclosed(&points)
        .ok_or(miette!("No rectangle fits inside the red and green tiles"))?;
    tracing::debug!(a = ?rectangle.a, b = ?rectangle.b, "largest enclosed rectangle");

    Ok(rectangle.area().to_string())
}
