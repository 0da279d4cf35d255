use std::io;

fn main() -> io::Result<()> {
    solutions::run("b19", solutions::atcoder::b19::solve)
}
