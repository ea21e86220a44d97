use chumsky::prelude::*;
use miette::*;

/// Number of marks on the dial (0 through 99).
pub const DIAL_SIZE: i64 = 100;

/// Mark the dial points at before the first rotation.
pub const START_POSITION: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u32),
    Right(u32),
}

/// One `L<n>` or `R<n>` rotation per line.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Rotation>, extra::Err<Rich<'a, char>>> {
    let rotation = one_of("LR")
        .then(
            text::int(10)
                .from_str::<u32>()
                .try_map(|n, span| n.map_err(|e| Rich::custom(span, e))),
        )
        .map(|(dir, amount)| match dir {
            'L' => Rotation::Left(amount),
            'R' => Rotation::Right(amount),
            _ => unreachable!("one_of ensures only L or R are parsed"),
        });

    rotation
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub fn parse_rotations(input: &str) -> Result<Vec<Rotation>> {
    parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed with errors: {:?}", e))
}

/// The safe's dial. The position is always normalized to `0..DIAL_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: i64,
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            position: START_POSITION,
        }
    }
}

impl Dial {
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Applies a rotation and returns how many clicks landed on 0 during it,
    /// counting the final mark and every full turn.
    pub fn turn(&mut self, rotation: Rotation) -> i64 {
        match rotation {
            Rotation::Left(amount) => {
                let amount = amount as i64;

                // Moving left covers the integers [pos - amount, pos - 1].
                // Multiples of DIAL_SIZE in [A, B] = floor(B / n) - floor((A - 1) / n)
                let upper = self.position - 1;
                let lower_minus_1 = self.position - amount - 1;
                let hits = upper.div_euclid(DIAL_SIZE) - lower_minus_1.div_euclid(DIAL_SIZE);

                self.position = (self.position - amount).rem_euclid(DIAL_SIZE);
                hits
            }
            Rotation::Right(amount) => {
                let amount = amount as i64;

                // Covers (pos, pos + amount]; pos is normalized so plain division works.
                let hits = (self.position + amount) / DIAL_SIZE;

                self.position = (self.position + amount) % DIAL_SIZE;
                hits
            }
        }
    }
}
