use std::io;

fn main() -> io::Result<()> {
    solutions::run("b13", solutions::atcoder::b13::solve)
}
