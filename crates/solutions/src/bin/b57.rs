use std::io;

fn main() -> io::Result<()> {
    solutions::run("b57", solutions::atcoder::b57::solve)
}
