use std::ops::Range;

/// Length of the longest window without a repeated byte.
pub fn longest_unique_window(text: &[u8]) -> usize {
    let mut last_seen = [None::<usize>; 256];
    let mut start = 0;
    let mut best = 0;
    for (i, &c) in text.iter().enumerate() {
        if let Some(prev) = last_seen[c as usize] {
            start = start.max(prev + 1);
        }
        last_seen[c as usize] = Some(i);
        best = best.max(i + 1 - start);
    }
    best
}

/// Shortest window of `text` containing every byte of `pattern` with
/// multiplicity; leftmost on ties, `None` when no window exists.
pub fn minimum_window(text: &[u8], pattern: &[u8]) -> Option<Range<usize>> {
    if pattern.is_empty() {
        return Some(0..0);
    }

    let mut need = [0_i64; 256];
    for &c in pattern {
        need[c as usize] += 1;
    }
    let mut missing = pattern.len();
    let mut best: Option<Range<usize>> = None;
    let mut l = 0;

    for (r, &c) in text.iter().enumerate() {
        if need[c as usize] > 0 {
            missing -= 1;
        }
        need[c as usize] -= 1;

        while missing == 0 {
            if best.as_ref().is_none_or(|b| r + 1 - l < b.len()) {
                best = Some(l..r + 1);
            }
            let left = text[l] as usize;
            need[left] += 1;
            if need[left] > 0 {
                missing += 1;
            }
            l += 1;
        }
    }
    best
}
