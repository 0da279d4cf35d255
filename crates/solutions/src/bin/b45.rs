use std::io;

fn main() -> io::Result<()> {
    solutions::run("b45", solutions::atcoder::b45::solve)
}
