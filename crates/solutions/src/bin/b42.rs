use std::io;

fn main() -> io::Result<()> {
    solutions::run("b42", solutions::atcoder::b42::solve)
}
