use std::io;

fn main() -> io::Result<()> {
    solutions::run("b55", solutions::atcoder::b55::solve)
}
