//! Each step adds 1 to one number and subtracts 1 from another, so the
//! total never changes.

use proconio::input;
use proconio::source::once::OnceSource;

use crate::yes_no;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        a: i64,
        b: i64,
        c: i64,
    }
    yes_no(a + b + c == 0).to_owned()
}
