use std::ops::Range;

use crate::PalindromeIndex;
use crate::hash::DoubleHash;

/// Palindrome checks by comparing the forward hash of a window with the hash
/// of the same window in the reversed text.
#[derive(Clone, Debug)]
pub struct HashedPalindrome {
    forward: DoubleHash,
    backward: DoubleHash,
}

impl PalindromeIndex for HashedPalindrome {
    fn new(text: &[u8]) -> Self {
        let reversed: Vec<u8> = text.iter().rev().copied().collect();
        Self {
            forward: DoubleHash::new(text),
            backward: DoubleHash::new(&reversed),
        }
    }

    fn is_palindrome(&self, range: Range<usize>) -> bool {
        let n = self.forward.len();
        if range.start > range.end || range.end > n {
            return false;
        }
        self.forward.hash(range.clone()) == self.backward.hash(n - range.end..n - range.start)
    }
}

/// Longest palindromic substring by expanding around all `2n - 1` centers.
///
/// Quadratic in the worst case; leftmost on ties.
pub fn longest_palindrome_expand(text: &[u8]) -> Range<usize> {
    let n = text.len();
    let mut best = 0..0;
    for center in 0..(2 * n).saturating_sub(1) {
        let mut l = center / 2;
        let mut r = center.div_ceil(2);
        if text[l] != text[r] {
            continue;
        }
        while l > 0 && r + 1 < n && text[l - 1] == text[r + 1] {
            l -= 1;
            r += 1;
        }
        if r + 1 - l > best.len() {
            best = l..r + 1;
        }
    }
    best
}
