use std::io;

fn main() -> io::Result<()> {
    solutions::run("b09", solutions::atcoder::b09::solve)
}
