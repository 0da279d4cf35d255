use std::io;

fn main() -> io::Result<()> {
    solutions::run("b18", solutions::atcoder::b18::solve)
}
