use miette::*;

use crate::ids::{is_doubled, parse_ranges, sum_matching};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parse_ranges(input);

    Ok(sum_matching(&ranges, is_doubled).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124";
        assert_eq!("1227775554", process(input)?);
        Ok(())
    }
}
