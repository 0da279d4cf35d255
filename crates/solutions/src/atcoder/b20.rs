use proconio::input;
use proconio::marker::Bytes;
use proconio::source::once::OnceSource;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        s: Bytes,
        t: Bytes,
    }
    dp::edit_distance(&s, &t).to_string()
}
