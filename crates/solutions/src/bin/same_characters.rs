use std::io;

fn main() -> io::Result<()> {
    solutions::run("same_characters", solutions::drill::same_characters::solve)
}
