/// Binary lifting over a functional graph `i -> next[i]`.
#[derive(Clone, Debug)]
pub struct Doubling {
    max_steps: u64,
    // table[k][i]: position after 2^k steps from i
    table: Vec<Vec<usize>>,
}

impl Doubling {
    /// Precomputes jumps of up to `max_steps` steps.
    ///
    /// # Panics
    ///
    /// If some `next[i]` is out of range.
    pub fn new(next: Vec<usize>, max_steps: u64) -> Self {
        let n = next.len();
        assert!(next.iter().all(|&v| v < n), "successor out of range");

        let levels = (u64::BITS - max_steps.leading_zeros()).max(1) as usize;
        let mut table = Vec::with_capacity(levels);
        table.push(next);
        for k in 1..levels {
            let prev = &table[k - 1];
            let row: Vec<usize> = prev.iter().map(|&mid| prev[mid]).collect();
            table.push(row);
        }
        Self { max_steps, table }
    }

    pub fn levels(&self) -> usize {
        self.table.len()
    }

    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Position after exactly `k` steps from `start`.
    ///
    /// # Panics
    ///
    /// If `k > max_steps` or `start` is out of range.
    pub fn jump(&self, start: usize, k: u64) -> usize {
        assert!(k <= self.max_steps, "k={k} exceeds max_steps={}", self.max_steps);
        let mut pos = start;
        for (level, row) in self.table.iter().enumerate() {
            if k >> level & 1 == 1 {
                pos = row[pos];
            }
        }
        pos
    }
}
