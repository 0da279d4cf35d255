use std::io;

fn main() -> io::Result<()> {
    solutions::run("b29", solutions::atcoder::b29::solve)
}
