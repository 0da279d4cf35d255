/// Subtraction game: a player removes `m` stones for some `m` in `moves`;
/// whoever cannot move loses.
///
/// `result[i]` is `true` when the player to move with `i` stones left wins.
pub fn winning_positions(n: usize, moves: &[usize]) -> Vec<bool> {
    let mut win = vec![false; n + 1];
    for i in 1..=n {
        win[i] = moves.iter().any(|&m| m <= i && !win[i - m]);
    }
    win
}

/// Grundy numbers of the subtraction game with the given moves, for
/// `0..limit` stones.
pub fn grundy_numbers(limit: usize, moves: &[usize]) -> Vec<u32> {
    let mut grundy = vec![0_u32; limit];
    let mut seen = vec![false; moves.len() + 1];
    for i in 0..limit {
        seen.fill(false);
        for &m in moves {
            if m <= i {
                let g = grundy[i - m] as usize;
                if g < seen.len() {
                    seen[g] = true;
                }
            }
        }
        grundy[i] = seen.iter().position(|&s| !s).unwrap_or(seen.len()) as u32;
    }
    grundy
}

pub fn nim_sum<I: IntoIterator<Item = u64>>(values: I) -> u64 {
    values.into_iter().fold(0, |acc, v| acc ^ v)
}
