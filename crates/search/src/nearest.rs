use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

/// Ordered integer set answering nearest-value queries.
#[derive(Clone, Debug, Default)]
pub struct NearestSet {
    values: BTreeSet<i64>,
}

impl NearestSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `false` if `x` was already present.
    pub fn insert(&mut self, x: i64) -> bool {
        self.values.insert(x)
    }

    /// Returns `false` if `x` was absent.
    pub fn remove(&mut self, x: i64) -> bool {
        self.values.remove(&x)
    }

    pub fn contains(&self, x: i64) -> bool {
        self.values.contains(&x)
    }

    /// Smallest element `>= x`.
    pub fn min_at_least(&self, x: i64) -> Option<i64> {
        self.values.range(x..).next().copied()
    }

    /// Largest element `< x`.
    pub fn max_below(&self, x: i64) -> Option<i64> {
        self.values.range((Unbounded, Excluded(x))).next_back().copied()
    }

    /// Distance from `x` to the closest element, `None` on an empty set.
    pub fn closest_distance(&self, x: i64) -> Option<u64> {
        let above = self.min_at_least(x).map(|v| v.abs_diff(x));
        let below = self.max_below(x).map(|v| v.abs_diff(x));
        match (above, below) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
