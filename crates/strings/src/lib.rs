mod bracket;
mod hash;
mod kmp;
mod manacher;
mod palindrome;
mod rle;
mod window;

use std::ops::Range;

pub use bracket::bracket_pairs;
pub use hash::{BASE_A, BASE_B, DoubleHash, MOD_A, MOD_B, PolyHash, longest_repeated_substring};
pub use kmp::{find_all, find_first, prefix_function};
pub use manacher::Manacher;
pub use palindrome::{HashedPalindrome, longest_palindrome_expand};
pub use rle::{count_and_say, run_length_encode};
pub use window::{longest_unique_window, minimum_window};

/// Static palindrome-substring queries over a byte string.
///
/// - Query ranges are half-open: `[l, r)`.
/// - An empty range is a palindrome; a range past the end is not.
pub trait PalindromeIndex: Sized {
    fn new(text: &[u8]) -> Self;
    fn is_palindrome(&self, range: Range<usize>) -> bool;
}
