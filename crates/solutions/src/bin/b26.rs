use std::io;

fn main() -> io::Result<()> {
    solutions::run("b26", solutions::atcoder::b26::solve)
}
