use chumsky::prelude::*;
use glam::I64Vec3;
use itertools::Itertools;
use miette::*;
use std::collections::HashMap;

pub type Point = I64Vec3;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = text::int(10)
        .from_str::<i64>()
        .try_map(|n, span| n.map_err(|e| Rich::custom(span, e)));

    let point = coord
        .clone()
        .then_ignore(just(','))
        .then(coord.clone())
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| Point::new(x, y, z));

    point
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// A candidate connection between two junction boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
    pub distance_squared: i64,
}

/// Every pair of points, closest first.
///
/// Pairs are enumerated `(i, j)` with `i < j` and ties keep that order.
pub fn edges_by_distance(points: &[Point]) -> Vec<Edge> {
    let mut edges = points
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| {
            let delta = a - b;
            Edge {
                a,
                b,
                distance_squared: delta.dot(delta),
            }
        })
        .collect::<Vec<_>>();

    // sort_by_key is stable
    edges.sort_by_key(|edge| edge.distance_squared);
    edges
}

/// What [`Circuits::connect`] did with an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Neither point was in a circuit; they form a new one.
    Created,
    /// One point joined the other's circuit.
    Joined,
    /// Two circuits became one under a fresh id.
    Merged,
    /// Both points were already in the same circuit.
    AlreadyConnected,
}

/// Circuit membership of every point touched by a processed edge.
///
/// Ids are never reused: merging relabels both circuits to a fresh id rather
/// than keeping either of the old ones.
#[derive(Debug, Default, Clone)]
pub struct Circuits {
    membership: HashMap<Point, usize>,
    next_id: usize,
}

impl Circuits {
    fn fresh_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn connect(&mut self, a: Point, b: Point) -> Link {
        match (self.circuit_of(a), self.circuit_of(b)) {
            (None, None) => {
                let id = self.fresh_id();
                self.membership.insert(a, id);
                self.membership.insert(b, id);
                Link::Created
            }
            (Some(id), None) => {
                self.membership.insert(b, id);
                Link::Joined
            }
            (None, Some(id)) => {
                self.membership.insert(a, id);
                Link::Joined
            }
            (Some(id_a), Some(id_b)) if id_a == id_b => Link::AlreadyConnected,
            (Some(id_a), Some(id_b)) => {
                let id = self.fresh_id();
                tracing::trace!(id_a, id_b, id, "merging circuits");
                self.membership
                    .values_mut()
                    .filter(|circuit| **circuit == id_a || **circuit == id_b)
                    .for_each(|circuit| *circuit = id);
                Link::Merged
            }
        }
    }

    pub fn circuit_of(&self, point: Point) -> Option<usize> {
        self.membership.get(&point).copied()
    }

    /// Number of points that belong to some circuit.
    pub fn grouped(&self) -> usize {
        self.membership.len()
    }

    /// The id the next new or merged circuit will get.
    pub fn next_id(&self) -> usize {
        self.next_id
    }

    /// Circuit sizes, largest first.
    pub fn sizes(&self) -> Vec<usize> {
        self.membership
            .values()
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect()
    }
}

/// Processes the `limit` shortest edges, counting edges inside a circuit too.
pub fn connect_closest(points: &[Point], limit: usize) -> Circuits {
    let mut circuits = Circuits::default();
    for edge in edges_by_distance(points).into_iter().take(limit) {
        circuits.connect(edge.a, edge.b);
    }
    circuits
}

/// The edge after which every point belongs to a circuit, if the edges get there.
pub fn completing_edge(points: &[Point]) -> Option<Edge> {
    let target = points.iter().unique().count();
    let mut circuits = Circuits::default();

    edges_by_distance(points).into_iter().find(|edge| {
        circuits.connect(edge.a, edge.b);
        circuits.grouped() == target
    })
}
