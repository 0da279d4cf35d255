use std::io;

fn main() -> io::Result<()> {
    solutions::run("same_substring", solutions::drill::same_substring::solve)
}
