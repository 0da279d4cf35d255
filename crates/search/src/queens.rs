/// Every placement of `n` non-attacking queens on an `n x n` board.
///
/// A placement lists the queen's column for each row; placements come in
/// lexicographic order.
pub fn n_queens(n: usize) -> Vec<Vec<usize>> {
    let mut solutions = Vec::new();
    let mut columns = Vec::with_capacity(n);
    place(n, &mut columns, &mut solutions);
    solutions
}

fn place(n: usize, columns: &mut Vec<usize>, solutions: &mut Vec<Vec<usize>>) {
    let row = columns.len();
    if row == n {
        solutions.push(columns.clone());
        return;
    }
    for col in 0..n {
        let safe = columns
            .iter()
            .enumerate()
            .all(|(r, &c)| c != col && row - r != c.abs_diff(col));
        if safe {
            columns.push(col);
            place(n, columns, solutions);
            columns.pop();
        }
    }
}

/// Number of `n`-queens placements, counted with column and diagonal bitmasks.
///
/// # Panics
///
/// If `n > 32`.
pub fn count_n_queens(n: usize) -> u64 {
    assert!(n <= 32, "board too large");
    let full = if n == 0 { 0 } else { u64::MAX >> (64 - n) };
    count(full, 0, 0, 0)
}

fn count(full: u64, cols: u64, down: u64, up: u64) -> u64 {
    if cols == full {
        return 1;
    }
    let mut free = full & !(cols | down | up);
    let mut total = 0;
    while free != 0 {
        let bit = free & free.wrapping_neg();
        free ^= bit;
        total += count(full, cols | bit, ((down | bit) << 1) & full, (up | bit) >> 1);
    }
    total
}
