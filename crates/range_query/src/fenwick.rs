use std::ops::{Add, Range, Sub};

/// Binary indexed tree over an additive group.
///
/// Internally 1-indexed; `tree[i]` holds the sum of the `i & i.wrapping_neg()`
/// elements ending at position `i - 1`.
#[derive(Clone, Debug)]
pub struct FenwickTree<T> {
    tree: Vec<T>,
}

impl<T> FenwickTree<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![T::default(); len + 1],
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add(&mut self, index: usize, delta: T) {
        assert!(index < self.len(), "index {index} out of range for length {}", self.len());
        let mut i = index + 1;
        while i < self.tree.len() {
            self.tree[i] = self.tree[i] + delta;
            i += i & i.wrapping_neg();
        }
    }

    /// Sum of `[0, end)`.
    pub fn prefix_sum(&self, end: usize) -> T {
        assert!(end <= self.len(), "end {end} out of range for length {}", self.len());
        let mut acc = T::default();
        let mut i = end;
        while i > 0 {
            acc = acc + self.tree[i];
            i &= i - 1;
        }
        acc
    }

    pub fn sum(&self, range: Range<usize>) -> T {
        assert!(range.start <= range.end, "range start exceeds end");
        self.prefix_sum(range.end) - self.prefix_sum(range.start)
    }
}

impl<T> From<&[T]> for FenwickTree<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    /// Linear-time construction.
    fn from(values: &[T]) -> Self {
        let n = values.len();
        let mut tree = Vec::with_capacity(n + 1);
        tree.push(T::default());
        tree.extend_from_slice(values);
        for i in 1..=n {
            let parent = i + (i & i.wrapping_neg());
            if parent <= n {
                tree[parent] = tree[parent] + tree[i];
            }
        }
        Self { tree }
    }
}
