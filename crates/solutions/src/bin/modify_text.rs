use std::io;

fn main() -> io::Result<()> {
    solutions::run("modify_text", solutions::drill::modify_text::solve)
}
