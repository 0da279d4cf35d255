pub fn run_length_encode(text: &[u8]) -> Vec<(u8, usize)> {
    let mut runs: Vec<(u8, usize)> = Vec::new();
    for &c in text {
        match runs.last_mut() {
            Some((prev, count)) if *prev == c => *count += 1,
            _ => runs.push((c, 1)),
        }
    }
    runs
}

/// The `n`-th term (1-based) of the look-and-say sequence starting at "1".
pub fn count_and_say(n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let mut term = String::from("1");
    for _ in 1..n {
        term = run_length_encode(term.as_bytes())
            .into_iter()
            .map(|(c, count)| format!("{count}{}", c as char))
            .collect();
    }
    term
}
