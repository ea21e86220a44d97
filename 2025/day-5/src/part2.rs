use miette::*;

use crate::intervals::{coverage, merge_all};
use crate::inventory::parse_inventory;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let inventory = parse_inventory(input)?;

    let merged = merge_all(inventory.fresh);
    tracing::debug!(ranges = merged.len(), "merged fresh ranges");

    Ok(coverage(&merged)?.to_string())
}
