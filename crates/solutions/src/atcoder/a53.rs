//! Priority queue queries: `1 x` push, `2` print the minimum, `3` pop it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use proconio::input;
use proconio::source::once::OnceSource;

use crate::lines;

pub fn solve(input: &str) -> String {
    let mut source = OnceSource::from(input);
    input! {
        from &mut source,
        q: usize,
    }

    let mut heap = BinaryHeap::new();
    let mut out = Vec::new();
    for _ in 0..q {
        input! {
            from &mut source,
            kind: u8,
        }
        match kind {
            1 => {
                input! {
                    from &mut source,
                    x: i64,
                }
                heap.push(Reverse(x));
            }
            2 => out.push(heap.peek().map_or(-1, |&Reverse(x)| x)),
            _ => {
                heap.pop();
            }
        }
    }
    lines(out)
}
