use std::io;

fn main() -> io::Result<()> {
    solutions::run("b44", solutions::atcoder::b44::solve)
}
