/// Glob matching over the whole text: `?` is any byte, `*` any run.
pub fn wildcard_match(text: &[u8], pattern: &[u8]) -> bool {
    let mut prev = vec![false; text.len() + 1];
    prev[0] = true;
    for &p in pattern {
        let mut cur = vec![false; text.len() + 1];
        if p == b'*' {
            cur[0] = prev[0];
            for i in 1..=text.len() {
                cur[i] = prev[i] || cur[i - 1];
            }
        } else {
            for i in 1..=text.len() {
                cur[i] = prev[i - 1] && (p == b'?' || p == text[i - 1]);
            }
        }
        prev = cur;
    }
    prev[text.len()]
}

/// Regular-expression matching over the whole text with `.` and `*`
/// (zero or more of the preceding element).
pub fn regex_match(text: &[u8], pattern: &[u8]) -> bool {
    let (n, m) = (text.len(), pattern.len());
    // dp[i][j]: text[i..] matches pattern[j..]
    let mut dp = vec![vec![false; m + 1]; n + 1];
    dp[n][m] = true;
    for i in (0..=n).rev() {
        for j in (0..m).rev() {
            let first = i < n && (pattern[j] == b'.' || pattern[j] == text[i]);
            dp[i][j] = if j + 1 < m && pattern[j + 1] == b'*' {
                dp[i][j + 2] || (first && dp[i + 1][j])
            } else {
                first && dp[i + 1][j + 1]
            };
        }
    }
    dp[0][0]
}

/// Decodings of a digit string under `A=1 .. Z=26`.
pub fn decode_ways(digits: &[u8]) -> u64 {
    if digits.is_empty() {
        return 0;
    }
    let (mut two_back, mut one_back) = (1_u64, 1_u64);
    for i in 0..digits.len() {
        let mut cur = 0;
        if digits[i] != b'0' {
            cur += one_back;
        }
        if i > 0 {
            let pair = (digits[i - 1] - b'0') * 10 + (digits[i] - b'0');
            if (10..=26).contains(&pair) {
                cur += two_back;
            }
        }
        two_back = one_back;
        one_back = cur;
    }
    one_back
}
