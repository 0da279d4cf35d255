use std::io;

fn main() -> io::Result<()> {
    solutions::run("b24", solutions::atcoder::b24::solve)
}
