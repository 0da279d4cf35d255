use std::io;

fn main() -> io::Result<()> {
    solutions::run("a75", solutions::atcoder::a75::solve)
}
