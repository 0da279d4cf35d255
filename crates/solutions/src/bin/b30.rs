use std::io;

fn main() -> io::Result<()> {
    solutions::run("b30", solutions::atcoder::b30::solve)
}
