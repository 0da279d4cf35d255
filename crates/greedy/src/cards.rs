/// Maximum of `|Σ front| + |Σ back|` over subsets of two-sided cards.
///
/// Fixes the sign of each sum in turn and keeps every card that helps.
pub fn max_abs_pair_sum(cards: &[(i64, i64)]) -> i64 {
    let mut best = 0;
    for sign_front in [1, -1] {
        for sign_back in [1, -1] {
            let score: i64 = cards
                .iter()
                .map(|&(front, back)| sign_front * front + sign_back * back)
                .filter(|&gain| gain > 0)
                .sum();
            best = best.max(score);
        }
    }
    best
}
