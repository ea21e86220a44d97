use chumsky::prelude::*;
use glam::I64Vec2;
use itertools::Itertools;
use miette::*;
use std::cmp::Reverse;

pub type Point = I64Vec2;

/// Spacing of the interior samples taken when validating a rectangle.
///
/// Matches the granularity of the puzzle's tile coordinates; it is not a
/// general point-in-polygon test.
pub const LATTICE_STEP: usize = 1000;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = text::int(10)
        .from_str::<i64>()
        .try_map(|n, span| n.map_err(|e| Rich::custom(span, e)));

    coord
        .clone()
        .then_ignore(just(','))
        .then(coord)
        .map(|(x, y)| Point::new(x, y))
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

/// Axis-aligned rectangle spanned by two red tiles at opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub a: Point,
    pub b: Point,
}

impl Rectangle {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn min(&self) -> Point {
        self.a.min(self.b)
    }

    pub fn max(&self) -> Point {
        self.a.max(self.b)
    }

    /// Number of tiles covered, borders included.
    pub fn area(&self) -> i64 {
        let extent = (self.a - self.b).abs() + Point::ONE;
        extent.x * extent.y
    }

    /// Whether `p` lies inside without touching the border.
    pub fn strictly_contains(&self, p: Point) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            self.a,
            self.b,
            Point::new(self.a.x, self.b.y),
            Point::new(self.b.x, self.a.y),
        ]
    }

    /// Samples every `step` tiles in both directions, starting at the minimum corner.
    pub fn lattice(&self, step: usize) -> impl Iterator<Item = Point> {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x)
            .step_by(step)
            .flat_map(move |x| (min.y..=max.y).step_by(step).map(move |y| Point::new(x, y)))
    }
}

/// The loop traced by the red tiles, as every horizontal or vertical segment
/// between two of them.
#[derive(Debug, Clone)]
pub struct Outline {
    segments: Vec<(Point, Point)>,
}

fn between(v: i64, l: i64, r: i64) -> bool {
    (v >= l && v <= r) || (v >= r && v <= l)
}

impl Outline {
    pub fn new(points: &[Point]) -> Self {
        let segments = points
            .iter()
            .enumerate()
            .cartesian_product(points.iter().enumerate())
            .filter(|((i, p), (j, q))| i != j && (p.x == q.x || p.y == q.y))
            .map(|((_, &p), (_, &q))| (p, q))
            .collect();

        Self { segments }
    }

    /// A red or green tile has a segment on each of its four sides.
    pub fn covers(&self, p: Point) -> bool {
        let spans_row = |(a, b): &&(Point, Point)| between(p.y, a.y, b.y);
        let spans_col = |(a, b): &&(Point, Point)| between(p.x, a.x, b.x);

        self.segments.iter().filter(spans_row).any(|(a, _)| p.x >= a.x)
            && self.segments.iter().filter(spans_row).any(|(a, _)| p.x <= a.x)
            && self.segments.iter().filter(spans_col).any(|(a, _)| p.y >= a.y)
            && self.segments.iter().filter(spans_col).any(|(a, _)| p.y <= a.y)
    }
}

/// Every rectangle two red tiles can span, largest first.
///
/// Ordered pairs (a tile with itself included); equal areas keep pair order.
fn candidates(points: &[Point]) -> Vec<Rectangle> {
    let mut rectangles = points
        .iter()
        .cartesian_product(points)
        .map(|(&a, &b)| Rectangle::new(a, b))
        .collect::<Vec<_>>();

    rectangles.sort_by_key(|r| Reverse(r.area()));
    rectangles
}

/// Largest rectangle spanned by any two red tiles.
pub fn largest(points: &[Point]) -> Option<Rectangle> {
    candidates(points).into_iter().next()
}

/// Largest rectangle that only covers red and green tiles.
///
/// Cheap filters run first: no red tile strictly inside, then the corners, then
/// the coarse lattice over the whole extent.
pub fn largest_enclosed(points: &[Point]) -> Option<Rectangle> {
    let outline = Outline::new(points);

    candidates(points)
        .into_iter()
        .filter(|r| !points.iter().any(|&p| r.strictly_contains(p)))
        .filter(|r| r.corners().into_iter().all(|c| outline.covers(c)))
        .find(|r| r.lattice(LATTICE_STEP).all(|p| outline.covers(p)))
}
