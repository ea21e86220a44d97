use chumsky::prelude::*;
use miette::*;

use crate::worksheet::{op_parser, Op};

/// Rows of numbers followed by one row of operators, all whitespace separated.
fn parser<'a>() -> impl Parser<'a, &'a str, (Vec<Vec<u128>>, Vec<Op>), extra::Err<Rich<'a, char>>>
{
    let number = text::int(10)
        .from_str::<u128>()
        .try_map(|n, span| n.map_err(|e| Rich::custom(span, e)))
        .padded_by(text::inline_whitespace());

    let row = number
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .then_ignore(text::newline());

    let ops = op_parser()
        .padded_by(text::inline_whitespace())
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>();

    row.repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .then(ops)
        .then_ignore(text::whitespace())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (rows, ops) = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    if let Some(row) = rows.iter().position(|row| row.len() != ops.len()) {
        return Err(miette!(
            "Row {} has {} numbers but there are {} operators",
            row,
            rows[row].len(),
            ops.len()
        ));
    }

    let grand_total = ops
        .iter()
        .enumerate()
        .try_fold(0u128, |total, (col, op)| {
            op.apply(rows.iter().map(|row| row[col]))
                .and_then(|value| total.checked_add(value))
                .ok_or_else(|| miette!("Problem {} overflows u128", col))
        })?;

    Ok(grand_total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "123 328  51 64 
 45 64  387 23 
  6 98  215 314
*   +   *   +  ";
        assert_eq!("4277556", process(input)?);
        Ok(())
    }

    #[test]
    fn rejects_missing_operator() {
        assert!(process("1 2\n3 4\n+\n").is_err());
    }

    #[test]
    fn overflow_is_an_error() {
        let max = u128::MAX;
        assert!(process(&format!("{max} 1\n2 1\n* +\n")).is_err());
        assert!(process(&format!("{max} 1\n0 0\n+ +\n")).is_err());
        assert!(process("999999999999999999999999999999999999999999\n+\n").is_err());
    }
}
