use std::io;

fn main() -> io::Result<()> {
    solutions::run("b54", solutions::atcoder::b54::solve)
}
