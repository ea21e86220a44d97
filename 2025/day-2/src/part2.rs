use miette::*;

use crate::ids::{is_repeated, parse_ranges, sum_matching};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parse_ranges(input);

    Ok(sum_matching(&ranges, is_repeated).to_string())
}
