use std::ops::Range;

#[derive(Clone, Debug)]
pub struct PrefixSum {
    acc: Vec<i64>,
}

impl PrefixSum {
    pub fn new(values: &[i64]) -> Self {
        let mut acc = Vec::with_capacity(values.len() + 1);
        acc.push(0);
        for &v in values {
            let last = acc[acc.len() - 1];
            acc.push(last + v);
        }
        Self { acc }
    }

    pub fn len(&self) -> usize {
        self.acc.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sum(&self, range: Range<usize>) -> i64 {
        self.acc[range.end] - self.acc[range.start]
    }
}

/// Two-dimensional prefix sums; `acc[i][j]` is the sum of the `i x j` top-left block.
#[derive(Clone, Debug)]
pub struct PrefixSum2d {
    acc: Vec<Vec<i64>>,
}

impl PrefixSum2d {
    pub fn new(grid: &[Vec<i64>]) -> Self {
        let h = grid.len();
        let w = grid.first().map_or(0, Vec::len);
        let mut acc = vec![vec![0_i64; w + 1]; h + 1];
        for i in 0..h {
            debug_assert_eq!(grid[i].len(), w, "ragged grid");
            for j in 0..w {
                acc[i + 1][j + 1] = acc[i][j + 1] + acc[i + 1][j] - acc[i][j] + grid[i][j];
            }
        }
        Self { acc }
    }

    pub fn height(&self) -> usize {
        self.acc.len() - 1
    }

    pub fn width(&self) -> usize {
        self.acc[0].len() - 1
    }

    pub fn sum(&self, rows: Range<usize>, cols: Range<usize>) -> i64 {
        let acc = &self.acc;
        acc[rows.end][cols.end] - acc[rows.start][cols.end] - acc[rows.end][cols.start]
            + acc[rows.start][cols.start]
    }
}
