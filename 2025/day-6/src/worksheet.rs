use chumsky::prelude::*;

/// Operator printed below a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Op::Add),
            '*' => Some(Op::Mul),
            _ => None,
        }
    }

    /// Folds the operands with this operator, `None` if the result overflows.
    pub fn apply(self, operands: impl IntoIterator<Item = u128>) -> Option<u128> {
        let mut operands = operands.into_iter();
        match self {
            Op::Add => operands.try_fold(0u128, u128::checked_add),
            Op::Mul => operands.try_fold(1u128, u128::checked_mul),
        }
    }
}

pub(crate) fn op_parser<'a>() -> impl Parser<'a, &'a str, Op, extra::Err<Rich<'a, char>>> + Clone
{
    one_of("+*").map(|symbol| match Op::from_symbol(symbol) {
        Some(op) => op,
        None => unreachable!("one_of ensures only + or * are parsed"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Op::Add, &[1, 2, 3], Some(6))]
    #[case(Op::Mul, &[2, 3, 4], Some(24))]
    #[case(Op::Add, &[], Some(0))]
    #[case(Op::Mul, &[], Some(1))]
    #[case(Op::Mul, &[7, 0], Some(0))]
    #[case(Op::Add, &[u128::MAX, 1], None)]
    #[case(Op::Mul, &[u128::MAX, 2], None)]
    fn applies_operators(
        #[case] op: Op,
        #[case] operands: &[u128],
        #[case] expected: Option<u128>,
    ) {
        assert_eq!(op.apply(operands.iter().copied()), expected);
    }

    #[test]
    fn recognises_symbols() {
        assert_eq!(Op::from_symbol('+'), Some(Op::Add));
        assert_eq!(Op::from_symbol('*'), Some(Op::Mul));
        assert_eq!(Op::from_symbol('-'), None);
    }
}
