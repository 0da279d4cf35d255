use std::io;

fn main() -> io::Result<()> {
    solutions::run("b34", solutions::atcoder::b34::solve)
}
