use std::io;

fn main() -> io::Result<()> {
    solutions::run("b39", solutions::atcoder::b39::solve)
}
