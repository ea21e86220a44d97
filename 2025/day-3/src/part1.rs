use miette::*;

use crate::joltage::total_joltage;

const DIGITS: usize = 2;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(total_joltage(input, DIGITS)?.to_string())
}
