/// Matches `(` with `)` using a stack.
///
/// Pairs are 0-based `(open, close)` in increasing order of `close`. `None`
/// when the text is unbalanced or contains another byte.
pub fn bracket_pairs(text: &[u8]) -> Option<Vec<(usize, usize)>> {
    let mut open = Vec::new();
    let mut pairs = Vec::with_capacity(text.len() / 2);
    for (i, &c) in text.iter().enumerate() {
        match c {
            b'(' => open.push(i),
            b')' => pairs.push((open.pop()?, i)),
            _ => return None,
        }
    }
    open.is_empty().then_some(pairs)
}
