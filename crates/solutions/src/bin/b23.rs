use std::io;

fn main() -> io::Result<()> {
    solutions::run("b23", solutions::atcoder::b23::solve)
}
