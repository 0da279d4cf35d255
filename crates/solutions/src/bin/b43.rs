use std::io;

fn main() -> io::Result<()> {
    solutions::run("b43", solutions::atcoder::b43::solve)
}
