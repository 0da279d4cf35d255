use std::io;

fn main() -> io::Result<()> {
    solutions::run("b11", solutions::atcoder::b11::solve)
}
