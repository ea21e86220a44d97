use miette::*;

use crate::inventory::parse_inventory;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let inventory = parse_inventory(input)?;

    // Count how many IDs fall into at least one fresh range
    let fresh_count = inventory
        .available
        .iter()
        .filter(|&&id| inventory.fresh.iter().any(|r| r.contains(id)))
        .count();

    Ok(fresh_count.to_string())
}
