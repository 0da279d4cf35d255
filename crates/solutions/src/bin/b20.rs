use std::io;

fn main() -> io::Result<()> {
    solutions::run("b20", solutions::atcoder::b20::solve)
}
