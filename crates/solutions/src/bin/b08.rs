use std::io;

fn main() -> io::Result<()> {
    solutions::run("b08", solutions::atcoder::b08::solve)
}
