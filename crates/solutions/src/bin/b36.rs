use std::io;

fn main() -> io::Result<()> {
    solutions::run("b36", solutions::atcoder::b36::solve)
}
