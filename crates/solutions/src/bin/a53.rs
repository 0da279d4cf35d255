use std::io;

fn main() -> io::Result<()> {
    solutions::run("a53", solutions::atcoder::a53::solve)
}
