use std::io;

fn main() -> io::Result<()> {
    solutions::run("a46", solutions::atcoder::a46::solve)
}
