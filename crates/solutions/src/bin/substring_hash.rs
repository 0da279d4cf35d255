use std::io;

fn main() -> io::Result<()> {
    solutions::run("substring_hash", solutions::drill::substring_hash::solve)
}
