use std::io;

fn main() -> io::Result<()> {
    solutions::run("b37", solutions::atcoder::b37::solve)
}
