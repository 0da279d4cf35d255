use std::ops::Range;

use crate::PalindromeIndex;

/// Manacher's algorithm over the text interleaved with separators.
///
/// Position `2i` of the interleaved text is `text[i]` and position `2i + 1`
/// is a separator, so odd and even palindromes share one radius array.
/// `radius[c]` is the largest `k` such that the interleaved window
/// `[c - k + 1, c + k - 1]` is a palindrome.
#[derive(Clone, Debug)]
pub struct Manacher {
    len: usize,
    radius: Vec<usize>,
}

#[inline(always)]
fn interleaved(text: &[u8], k: usize) -> Option<u8> {
    (k % 2 == 0).then(|| text[k / 2])
}

impl Manacher {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Longest palindromic substring, leftmost on ties.
    pub fn longest(&self) -> Range<usize> {
        let mut best = 0..0;
        for (c, &r) in self.radius.iter().enumerate() {
            let lo = c + 1 - r;
            let hi = c + r - 1;
            let l = lo.div_ceil(2);
            let end = hi / 2 + 1;
            if end > l && end - l > best.len() {
                best = l..end;
            }
        }
        best
    }
}

impl PalindromeIndex for Manacher {
    fn new(text: &[u8]) -> Self {
        let n = text.len();
        if n == 0 {
            return Self {
                len: 0,
                radius: Vec::new(),
            };
        }

        let m = 2 * n - 1;
        let mut radius = vec![0_usize; m];
        let (mut i, mut j) = (0_usize, 0_usize);
        while i < m {
            while i >= j && i + j < m && interleaved(text, i - j) == interleaved(text, i + j) {
                j += 1;
            }
            radius[i] = j;

            let mut k = 1;
            while i >= k && k + radius[i - k] < j {
                radius[i + k] = radius[i - k];
                k += 1;
            }
            i += k;
            j -= k;
        }

        Self { len: n, radius }
    }

    fn is_palindrome(&self, range: Range<usize>) -> bool {
        if range.start > range.end || range.end > self.len {
            return false;
        }
        if range.is_empty() {
            return true;
        }
        self.radius[range.start + range.end - 1] >= range.len()
    }
}
