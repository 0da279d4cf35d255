use std::io;

fn main() -> io::Result<()> {
    solutions::run("b06", solutions::atcoder::b06::solve)
}
