use std::ops::Range;

use crate::monoid::Monoid;

/// Bottom-up segment tree with point assignment and range fold.
pub struct SegmentTree<M: Monoid> {
    len: usize,
    size: usize,
    tree: Vec<M::Value>,
}

impl<M: Monoid> SegmentTree<M> {
    pub fn new(len: usize) -> Self {
        let size = len.next_power_of_two();
        Self {
            len,
            size,
            tree: vec![M::identity(); 2 * size],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> &M::Value {
        assert!(index < self.len, "index {index} out of range for length {}", self.len);
        &self.tree[self.size + index]
    }

    pub fn set(&mut self, index: usize, value: M::Value) {
        assert!(index < self.len, "index {index} out of range for length {}", self.len);
        let mut i = self.size + index;
        self.tree[i] = value;
        while i > 1 {
            i >>= 1;
            self.tree[i] = M::op(&self.tree[2 * i], &self.tree[2 * i + 1]);
        }
    }

    /// Fold of `[l, r)` in index order; the identity for an empty range.
    pub fn fold(&self, range: Range<usize>) -> M::Value {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "range {range:?} out of bounds for length {}",
            self.len
        );

        let mut l = range.start + self.size;
        let mut r = range.end + self.size;
        let mut left = M::identity();
        let mut right = M::identity();

        while l < r {
            if (l & 1) == 1 {
                left = M::op(&left, &self.tree[l]);
                l += 1;
            }
            if (r & 1) == 1 {
                r -= 1;
                right = M::op(&self.tree[r], &right);
            }
            l >>= 1;
            r >>= 1;
        }

        M::op(&left, &right)
    }

    pub fn all_fold(&self) -> M::Value {
        self.tree[1].clone()
    }
}

impl<M: Monoid> From<Vec<M::Value>> for SegmentTree<M> {
    fn from(values: Vec<M::Value>) -> Self {
        let len = values.len();
        let size = len.next_power_of_two();
        let mut tree = vec![M::identity(); 2 * size];
        for (slot, value) in tree[size..].iter_mut().zip(values) {
            *slot = value;
        }
        for i in (1..size).rev() {
            tree[i] = M::op(&tree[2 * i], &tree[2 * i + 1]);
        }
        Self { len, size, tree }
    }
}
