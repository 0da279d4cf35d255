use std::ops::Range;

/// Imos method: record range additions in O(1), materialize once.
#[derive(Clone, Debug)]
pub struct Difference {
    diff: Vec<i64>,
}

impl Difference {
    pub fn new(len: usize) -> Self {
        Self {
            diff: vec![0; len + 1],
        }
    }

    pub fn add(&mut self, range: Range<usize>, delta: i64) {
        self.diff[range.start] += delta;
        self.diff[range.end] -= delta;
    }

    pub fn build(&self) -> Vec<i64> {
        let len = self.diff.len() - 1;
        let mut values = Vec::with_capacity(len);
        let mut acc = 0;
        for &d in &self.diff[..len] {
            acc += d;
            values.push(acc);
        }
        values
    }
}

/// 2D imos: every rectangle touches four corners of the difference grid.
#[derive(Clone, Debug)]
pub struct Difference2d {
    height: usize,
    width: usize,
    diff: Vec<Vec<i64>>,
}

impl Difference2d {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            diff: vec![vec![0; width + 1]; height + 1],
        }
    }

    pub fn add(&mut self, rows: Range<usize>, cols: Range<usize>, delta: i64) {
        self.diff[rows.start][cols.start] += delta;
        self.diff[rows.start][cols.end] -= delta;
        self.diff[rows.end][cols.start] -= delta;
        self.diff[rows.end][cols.end] += delta;
    }

    pub fn build(&self) -> Vec<Vec<i64>> {
        let mut grid = vec![vec![0; self.width]; self.height];
        for i in 0..self.height {
            let mut row_acc = 0;
            for j in 0..self.width {
                row_acc += self.diff[i][j];
                let above = if i > 0 { grid[i - 1][j] } else { 0 };
                grid[i][j] = above + row_acc;
            }
        }
        grid
    }
}
