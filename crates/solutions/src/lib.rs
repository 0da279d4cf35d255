//! Contest solutions built on the algorithm crates of this workspace.
//!
//! Every problem exposes `solve(input: &str) -> String` so it can be driven
//! from a test with the sample text, and a thin binary under `src/bin`
//! that feeds it standard input through [`run`].

use std::fmt::Display;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

pub mod atcoder;
pub mod drill;

/// Reads all of stdin, solves, and prints the answer with a trailing newline.
///
/// Logging goes to stderr and is silent unless `RUST_LOG` is set.
pub fn run(id: &str, solve: fn(&str) -> String) -> io::Result<()> {
    let _ = env_logger::try_init();

    let input = io::read_to_string(io::stdin().lock())?;
    let start = Instant::now();
    let answer = solve(&input);
    log::info!("{id}: {} input bytes, solved in {:?}", input.len(), start.elapsed());
    log::debug!("{id}: {} answer bytes", answer.len());

    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "{}", answer.trim_end())?;
    out.flush()
}

/// One item per line.
pub(crate) fn lines<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join(items, "\n")
}

pub(crate) fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.to_string());
    }
    out
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins() {
        assert_eq!(lines([1, 2, 3]), "1\n2\n3");
        assert_eq!(join(Vec::<u8>::new(), " "), "");
        assert_eq!(join(["a", "b"], " "), "a b");
        assert_eq!(yes_no(true), "Yes");
    }
}
