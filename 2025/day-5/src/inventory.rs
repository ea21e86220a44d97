use chumsky::prelude::*;
use miette::*;

use crate::intervals::Interval;

/// The ingredient database: fresh id ranges followed by available ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub fresh: Vec<Interval>,
    pub available: Vec<u64>,
}

type RawInventory = (Vec<(u64, u64)>, Vec<u64>);

fn parser<'a>() -> impl Parser<'a, &'a str, RawInventory, extra::Err<Rich<'a, char>>> {
    // Accepts both LF and CRLF line endings
    let newline = just('\r').or_not().ignore_then(just('\n'));

    let id = text::int(10)
        .from_str::<u64>()
        .try_map(|id, span| id.map_err(|e| Rich::custom(span, e)));

    let range = id.clone().then_ignore(just('-')).then(id.clone());

    // Block 1: Ranges
    let ranges = range.separated_by(newline.clone()).allow_trailing().collect();

    // Block 2: IDs
    let ids = id
        .separated_by(newline.clone())
        .allow_trailing()
        .collect();

    // The ranges block swallows its trailing newline, leaving the blank line
    ranges.then_ignore(newline).then(ids).padded()
}

pub fn parse_inventory(input: &str) -> Result<Inventory> {
    let (ranges, available) = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let fresh = ranges
        .into_iter()
        .map(|(start, end)| {
            if start > end {
                Err(miette!("Range {start}-{end} ends before it starts"))
            } else {
                Ok(Interval::new(start, end))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Inventory { fresh, available })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_blocks() -> Result<()> {
        let inventory = parse_inventory("3-5\r\n10-14\r\n\r\n1\r\n5\r\n")?;
        assert_eq!(
            inventory.fresh,
            vec![Interval::new(3, 5), Interval::new(10, 14)]
        );
        assert_eq!(inventory.available, vec![1, 5]);
        Ok(())
    }

    #[test]
    fn rejects_reversed_range() {
        assert!(parse_inventory("5-3\n\n1").is_err());
    }

    #[test]
    fn rejects_ids_beyond_u64() {
        assert!(parse_inventory("1-18446744073709551616\n\n1").is_err());
        assert!(parse_inventory("1-5\n\n18446744073709551616").is_err());
    }
}
