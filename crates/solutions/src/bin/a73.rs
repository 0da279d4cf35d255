use std::io;

fn main() -> io::Result<()> {
    solutions::run("a73", solutions::atcoder::a73::solve)
}
