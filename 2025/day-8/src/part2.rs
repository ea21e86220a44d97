use miette::*;

use crate::circuits::{completing_edge, parse_points};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    let edge = completing_edge(&points)
        .ok_or(miette!("Junction boxes could not all be connected"))?;

    Ok((edge.a.x * edge.b.x).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

        assert_eq!("25272", process(input)?);
        Ok(())
    }

    #[test]
    fn running_out_of_edges_is_an_error() {
        assert!(process("1,2,3").is_err());
    }
}
