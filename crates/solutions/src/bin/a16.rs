use std::io;

fn main() -> io::Result<()> {
    solutions::run("a16", solutions::atcoder::a16::solve)
}
