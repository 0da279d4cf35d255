use std::io;

fn main() -> io::Result<()> {
    solutions::run("a64", solutions::atcoder::a64::solve)
}
