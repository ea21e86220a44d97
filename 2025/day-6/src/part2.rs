use miette::*;

use crate::worksheet::Op;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let lines = input
        .trim_end_matches(['\r', '\n'])
        .lines()
        .map(|line| line.trim_end_matches('\r').as_bytes())
        .collect::<Vec<_>>();

    let (op_row, digit_rows) = lines
        .split_last()
        .ok_or_else(|| miette!("Empty worksheet"))?;

    // Rows may be ragged once trailing spaces are stripped; pad them with blanks
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let cell = |line: &[u8], col: usize| line.get(col).copied().unwrap_or(b' ') as char;

    let mut grand_total: u128 = 0;
    let mut operands: Vec<u128> = Vec::new();

    // Cephalopod math is read right to left, one column per number
    for col in (0..width).rev() {
        let digits: String = digit_rows
            .iter()
            .map(|&line| cell(line, col))
            .filter(|c| !c.is_whitespace())
            .collect();

        // A column without digits only separates problems
        if !digits.is_empty() {
            let number = digits
                .parse::<u128>()
                .into_diagnostic()
                .wrap_err_with(|| format!("Column {col} does not hold a number: {digits:?}"))?;
            operands.push(number);
        }

        if let Some(op) = Op::from_symbol(cell(*op_row, col)) {
            grand_total = op
                .apply(operands.drain(..))
                .and_then(|value| grand_total.checked_add(value))
                .ok_or_else(|| miette!("Problem ending at column {col} overflows u128"))?;
        }
    }

    if !operands.is_empty() {
        tracing::warn!(?operands, "numbers left without an operator");
    }

    Ok(grand_total.to_string())
}
