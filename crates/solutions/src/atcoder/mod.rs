//! Tessoku book problems, one module per task id.

pub mod a16;
pub mod a46;
pub mod a53;
pub mod a55;
pub mod a64;
pub mod a73;
pub mod a75;
pub mod a76;
pub mod b06;
pub mod b08;
pub mod b09;
pub mod b11;
pub mod b13;
pub mod b14;
pub mod b18;
pub mod b19;
pub mod b20;
pub mod b23;
pub mod b24;
pub mod b26;
pub mod b29;
pub mod b30;
pub mod b32;
pub mod b33;
pub mod b34;
pub mod b36;
pub mod b37;
pub mod b39;
pub mod b42;
pub mod b43;
pub mod b44;
pub mod b45;
pub mod b51;
pub mod b52;
pub mod b54;
pub mod b55;
pub mod b56;
pub mod b57;

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn check(solve: fn(&str) -> String, input: &str, expected: &str) {
        assert_eq!(solve(input), expected, "input:\n{input}");
    }

    #[test]
    fn graphs() {
        check(a16::solve, "5\n2 8 9 10\n5 4 8\n", "13");
        check(a16::solve, "2\n7\n\n", "7");
        check(a64::solve, "4 2\n1 2 5\n2 3 1\n", "0\n5\n6\n-1");
        check(a73::solve, "4 4\n1 2 30 1\n2 4 30 1\n1 3 40 0\n3 4 20 0\n", "60 2");
        check(a73::solve, "3 2\n1 2 10 0\n2 3 10 0\n", "20 0");
        check(b52::solve, "5 3\n#...#\n", "#@@@#");
        check(b52::solve, "6 3\n.#..#.\n", ".#@@#.");
    }

    #[test]
    fn tour_heuristic_visits_every_city_once() {
        let out = a46::solve("5\n0 0\n10 0\n10 10\n0 10\n5 5\n");
        let cities: Vec<usize> = out.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(cities.len(), 6);
        assert_eq!(cities[0], 1);
        assert_eq!(cities[5], 1);
        let mut inner = cities[..5].to_vec();
        inner.sort_unstable();
        assert_eq!(inner, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn queues_and_sets() {
        check(a53::solve, "5\n1 2022\n1 1\n2\n3\n2\n", "1\n2022");
        check(a55::solve, "5\n1 20\n1 10\n3 15\n2 20\n3 15\n", "20\n-1");
        check(b55::solve, "6\n2 3\n1 10\n2 8\n1 5\n2 7\n2 20\n", "-1\n2\n2\n10");
        check(b54::solve, "5\n30\n10\n30\n20\n10\n", "2");
        check(b44::solve, "3\n1 2 3\n4 5 6\n7 8 9\n3\n2 1 1\n1 1 3\n2 1 2\n", "1\n8");
        check(b43::solve, "4 6\n1 4 1 4 2 1\n", "3\n5\n6\n4");
    }

    #[test]
    fn greedy_choices() {
        check(a75::solve, "4\n20 100\n30 250\n50 200\n40 150\n", "4");
        check(b39::solve, "5 4\n1 1\n2 4\n2 3\n3 4\n4 2\n", "12");
        check(b42::solve, "5\n2 8\n4 -5\n5 -3\n-4 1\n-2 -3\n", "18");
    }

    #[test]
    fn prefix_sums_and_counting() {
        check(a76::solve, "5 65 7 37\n5 15 30 50 55\n", "7");
        check(b06::solve, "7\n0 1 1 0 1 0 0\n3\n2 5\n2 7\n5 7\n", "win\ndraw\nlose");
        check(b08::solve, "4\n1 3\n2 5\n3 1\n3 3\n3\n1 1 3 3\n1 1 5 5\n2 2 2 2\n", "3\n4\n0");
        check(b09::solve, "2\n1 1 3 3\n2 2 4 4\n", "7");
        check(b11::solve, "5\n1 3 3 7 9\n3\n3\n8\n100\n", "1\n4\n5");
        check(b13::solve, "7 50\n11 12 16 22 27 28 31\n", "13");
    }

    #[test]
    fn dynamic_programming() {
        check(b14::solve, "6 30\n5 1 18 7 2 9\n", "Yes");
        check(b14::solve, "3 100\n1 2 3\n", "No");
        check(b18::solve, "3 7\n2 2 3\n", "3\n1 2 3");
        check(b18::solve, "2 10\n1 2\n", "-1");
        check(b19::solve, "3 8\n3 30\n4 50\n5 60\n", "90");
        check(b20::solve, "tokyo\nkyoto\n", "4");
        check(b23::solve, "4\n0 0\n0 1\n1 1\n1 0\n", "4.000000000000");
        check(b24::solve, "5\n30 50\n10 30\n40 10\n50 20\n40 60\n", "3");
        check(b24::solve, "3\n1 1\n1 2\n1 3\n", "1");
    }

    #[test]
    fn number_theory_and_games() {
        check(b26::solve, "20\n", "2\n3\n5\n7\n11\n13\n17\n19");
        check(b29::solve, "5 23\n", "871631629");
        check(b30::solve, "3 4\n", "10");
        check(b32::solve, "8 2\n2 3\n", "First");
        check(b32::solve, "5 2\n2 3\n", "Second");
        check(b33::solve, "2 3 4\n1 2\n3 3\n", "First");
        check(b34::solve, "2 2 3\n7 8\n", "Second");
        check(b34::solve, "1 2 3\n1000000000000000002\n", "First");
        check(b36::solve, "5 1\n11010\n", "Yes");
        check(b36::solve, "5 2\n11010\n", "No");
        check(b37::solve, "4\n", "10");
        check(b37::solve, "288\n", "2826");
        check(b45::solve, "3 -4 1\n", "Yes");
        check(b45::solve, "1 2 3\n", "No");
    }

    #[test]
    fn strings_and_lifting() {
        check(b51::solve, "(())()\n", "2 3\n1 4\n5 6");
        check(b56::solve, "11 3\nmississippi\n5 8\n6 10\n2 8\n", "Yes\nNo\nYes");
        let expected = [[0; 19].as_slice(), &[9; 10], &[18]].concat();
        check(b57::solve, "30 2\n", &crate::lines(expected));
    }
}
