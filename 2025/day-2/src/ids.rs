use chumsky::prelude::*;
use std::ops::RangeInclusive;

fn range_parser<'a>() -> impl Parser<'a, &'a str, RangeInclusive<u64>, extra::Err<Rich<'a, char>>> {
    // Ids that overflow u64 become parse errors instead of panics
    let id = text::int(10)
        .from_str::<u64>()
        .try_map(|id, span| id.map_err(|e| Rich::custom(span, e)));

    id.clone()
        .then_ignore(just('-'))
        .then(id)
        .map(|(start, end)| start..=end)
        .padded() // Handles surrounding whitespace (including newlines)
}

/// Parses a list of ranges "min-max" separated by commas.
///
/// Entries that are not a well formed range are skipped rather than failing
/// the whole list.
pub fn parse_ranges(input: &str) -> Vec<RangeInclusive<u64>> {
    let parser = range_parser();

    input
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| match parser.parse(entry).into_result() {
            Ok(range) => Some(range),
            Err(errors) => {
                tracing::warn!(entry = entry.trim(), ?errors, "skipping malformed id range");
                None
            }
        })
        .collect()
}

/// Checks if an ID consists of a digit sequence repeated twice (e.g., 123123, 55).
pub fn is_doubled(n: u64) -> bool {
    let s = n.to_string();

    // An ID must have even length to be two identical halves
    if s.len() % 2 != 0 {
        return false;
    }

    let (left, right) = s.split_at(s.len() / 2);
    left == right
}

/// Checks if an ID consists of a digit sequence repeated at least twice.
///
/// 11 (1 x 2), 123123 (123 x 2) and 121212 (12 x 3) all qualify.
pub fn is_repeated(n: u64) -> bool {
    let s = n.to_string();
    let bytes = s.as_bytes();
    let len = bytes.len();

    (1..=len / 2)
        .filter(|pattern_len| len % pattern_len == 0)
        .any(|pattern_len| {
            let pattern = &bytes[..pattern_len];
            bytes.chunks(pattern_len).all(|chunk| chunk == pattern)
        })
}

/// Sums the ids matching `predicate`, range by range.
pub fn sum_matching(ranges: &[RangeInclusive<u64>], predicate: impl Fn(u64) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|range| range.clone())
        .filter(|&id| predicate(id))
        .sum()
}
