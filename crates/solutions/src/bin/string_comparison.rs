use std::io;

fn main() -> io::Result<()> {
    solutions::run("string_comparison", solutions::drill::string_comparison::solve)
}
