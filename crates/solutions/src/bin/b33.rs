use std::io;

fn main() -> io::Result<()> {
    solutions::run("b33", solutions::atcoder::b33::solve)
}
