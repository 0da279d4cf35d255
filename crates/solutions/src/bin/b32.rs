use std::io;

fn main() -> io::Result<()> {
    solutions::run("b32", solutions::atcoder::b32::solve)
}
