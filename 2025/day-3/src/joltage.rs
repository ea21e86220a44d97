use chumsky::prelude::*;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub fn parse_banks(input: &str) -> Result<Vec<&str>> {
    parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// Largest number formed by keeping exactly `digits` batteries of `bank` in order.
///
/// Each output digit is the leftmost maximum of the window that still leaves
/// enough batteries for the digits after it.
pub fn max_joltage(bank: &str, digits: usize) -> Result<u64> {
    let bank = bank.as_bytes();
    if bank.len() < digits {
        return Err(miette!(
            "Bank of {} batteries cannot supply {} digits",
            bank.len(),
            digits
        ));
    }

    let mut start = 0;
    let mut joltage = 0u64;
    for remaining in (0..digits).rev() {
        let window = &bank[start..bank.len() - remaining];

        // max_by_key returns the last maximum, so search the reversed window
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, digit)| *digit)
            .ok_or_else(|| miette!("Empty battery window"))?;

        start += offset + 1;
        joltage = joltage * 10 + (digit - b'0') as u64;
    }

    Ok(joltage)
}

/// Sums the maximum joltage of every bank.
pub fn total_joltage(input: &str, digits: usize) -> Result<u64> {
    parse_banks(input)?
        .into_iter()
        .map(|bank| max_joltage(bank, digits))
        .sum()
}
