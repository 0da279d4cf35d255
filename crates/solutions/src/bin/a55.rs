use std::io;

fn main() -> io::Result<()> {
    solutions::run("a55", solutions::atcoder::a55::solve)
}
