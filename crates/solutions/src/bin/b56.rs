use std::io;

fn main() -> io::Result<()> {
    solutions::run("b56", solutions::atcoder::b56::solve)
}
