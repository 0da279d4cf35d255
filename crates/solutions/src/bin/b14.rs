use std::io;

fn main() -> io::Result<()> {
    solutions::run("b14", solutions::atcoder::b14::solve)
}
