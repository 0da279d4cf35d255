pub fn digit_sum(mut x: u64) -> u64 {
    let mut sum = 0;
    while x > 0 {
        sum += x % 10;
        x /= 10;
    }
    sum
}

/// `digit_sum(1) + digit_sum(2) + ... + digit_sum(n)`.
///
/// Counts, for every decimal position, how often each digit `1..=9` shows up
/// among `1..=n`, so the cost is `O(log n)`.
pub fn digit_sum_total(n: u64) -> u64 {
    let mut total = 0_u64;
    let mut base = 1_u64;

    while base <= n {
        let higher = n / base / 10;
        let current = (n / base) % 10;
        let lower = n % base;

        // Full cycles contribute 1 + 2 + ... + 9 per block of `base` numbers.
        total += 45 * higher * base;
        total += current * (current.saturating_sub(1)) / 2 * base;
        total += current * (lower + 1);

        match base.checked_mul(10) {
            Some(next) => base = next,
            None => break,
        }
    }
    total
}
