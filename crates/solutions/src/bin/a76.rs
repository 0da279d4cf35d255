use std::io;

fn main() -> io::Result<()> {
    solutions::run("a76", solutions::atcoder::a76::solve)
}
