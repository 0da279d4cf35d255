use std::io;

fn main() -> io::Result<()> {
    solutions::run("b51", solutions::atcoder::b51::solve)
}
