//! Inclusive integer intervals and their merge-to-fixpoint.

use miette::*;

/// An inclusive `[start, end]` interval with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "interval {start}-{end} is reversed");
        Self { start, end }
    }

    pub fn contains(&self, n: u64) -> bool {
        n >= self.start && n <= self.end
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The union of two overlapping intervals, `None` when they are disjoint.
    pub fn merge(&self, other: &Interval) -> Option<Interval> {
        self.overlaps(other).then(|| {
            Interval::new(self.start.min(other.start), self.end.max(other.end))
        })
    }

    /// Number of integers covered, `None` for `0..=u64::MAX` which has 2^64.
    pub fn size(&self) -> Option<u64> {
        (self.end - self.start).checked_add(1)
    }
}

/// Merges overlapping intervals until no pair overlaps.
///
/// After every successful merge both inputs are removed, their union is pushed
/// to the back and the pair scan starts over.
pub fn merge_all(mut intervals: Vec<Interval>) -> Vec<Interval> {
    'scan: loop {
        for i in 0..intervals.len() {
            for j in i + 1..intervals.len() {
                if let Some(merged) = intervals[i].merge(&intervals[j]) {
                    // j > i, so removing j first keeps i valid
                    intervals.remove(j);
                    intervals.remove(i);
                    intervals.push(merged);
                    continue 'scan;
                }
            }
        }
        return intervals;
    }
}

/// Total number of integers covered by pairwise disjoint intervals.
pub fn coverage(intervals: &[Interval]) -> Result<u64> {
    intervals
        .iter()
        .try_fold(0u64, |total, interval| {
            interval.size().and_then(|size| total.checked_add(size))
        })
        .ok_or_else(|| miette!("Coverage does not fit in u64"))
}
