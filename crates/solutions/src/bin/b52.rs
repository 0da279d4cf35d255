use std::io;

fn main() -> io::Result<()> {
    solutions::run("b52", solutions::atcoder::b52::solve)
}
