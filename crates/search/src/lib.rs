mod bisect;
mod doubling;
mod meet;
mod nearest;
mod queens;
mod window;

pub use bisect::{bisect, lower_bound, upper_bound};
pub use doubling::Doubling;
pub use meet::subset_sum_meet_in_middle;
pub use nearest::NearestSet;
pub use queens::{count_n_queens, n_queens};
pub use window::count_windows_at_most;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn bounds_match_linear_scan() {
        let mut rng = StdRng::seed_from_u64(0x5EA2_0001);
        for _ in 0..200 {
            let n = rng.random_range(0..20);
            let mut values: Vec<i32> = (0..n).map(|_| rng.random_range(0..10)).collect();
            values.sort_unstable();
            for x in -1..=11 {
                let lower = values.iter().filter(|&&v| v < x).count();
                let upper = values.iter().filter(|&&v| v <= x).count();
                assert_eq!(lower_bound(&values, &x), lower, "{values:?} x={x}");
                assert_eq!(upper_bound(&values, &x), upper, "{values:?} x={x}");
            }
        }
    }

    #[test]
    fn bisect_finds_boundaries() {
        // largest x with x^3 + x <= 1_000_000
        let root = bisect(0, 1_000, |x| x * x * x + x <= 1_000_000);
        assert_eq!(root, 99);
        // smallest x with x * x >= 50, searching from above
        assert_eq!(bisect(100, 0, |x| x * x >= 50), 8);
        assert_eq!(bisect(3, 4, |_| unreachable!()), 3);
    }

    #[test]
    fn windows_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5EA2_0002);
        for _ in 0..200 {
            let n = rng.random_range(0..15);
            let values: Vec<u64> = (0..n).map(|_| rng.random_range(0..6)).collect();
            let k = rng.random_range(0..15);
            let mut expected = 0;
            for l in 0..n {
                for r in l + 1..=n {
                    if values[l..r].iter().sum::<u64>() <= k {
                        expected += 1;
                    }
                }
            }
            assert_eq!(count_windows_at_most(&values, k), expected, "{values:?} k={k}");
        }
        assert_eq!(count_windows_at_most(&[11, 12, 16, 22, 27, 28, 31], 50), 13);
    }

    #[test]
    fn meet_in_middle_matches_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5EA2_0003);
        for _ in 0..200 {
            let n = rng.random_range(0..10);
            let values: Vec<u64> = (0..n).map(|_| rng.random_range(1..20)).collect();
            let target = rng.random_range(0..80);
            let expected = (0..1_usize << n).any(|mask| {
                (0..n).filter(|&i| mask >> i & 1 == 1).map(|i| values[i]).sum::<u64>() == target
            });
            assert_eq!(subset_sum_meet_in_middle(&values, target), expected);
        }
        assert!(subset_sum_meet_in_middle(&[], 0));
        assert!(!subset_sum_meet_in_middle(&[], 1));
    }

    #[test]
    fn doubling_matches_naive_walk() {
        let mut rng = StdRng::seed_from_u64(0x5EA2_0004);
        for _ in 0..50 {
            let n = rng.random_range(1..30);
            let next: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
            let max_steps = rng.random_range(0..200_u64);
            let doubling = Doubling::new(next.clone(), max_steps);
            for _ in 0..20 {
                let start = rng.random_range(0..n);
                let k = rng.random_range(0..=max_steps);
                let mut pos = start;
                for _ in 0..k {
                    pos = next[pos];
                }
                assert_eq!(doubling.jump(start, k), pos, "start={start} k={k}");
            }
        }
        assert_eq!(Doubling::new(vec![0], 0).levels(), 1);
        assert_eq!(Doubling::new(vec![0], 8).levels(), 4);
    }

    #[test]
    #[should_panic]
    fn doubling_rejects_too_many_steps() {
        Doubling::new(vec![1, 0], 5).jump(0, 6);
    }

    #[test]
    fn nearest_set_matches_btree_scan() {
        let mut rng = StdRng::seed_from_u64(0x5EA2_0005);
        let mut set = NearestSet::new();
        let mut naive = BTreeSet::new();
        assert_eq!(set.closest_distance(5), None);
        for _ in 0..2000 {
            let x = rng.random_range(-50..50_i64);
            match rng.random_range(0..3) {
                0 => assert_eq!(set.insert(x), naive.insert(x)),
                1 => assert_eq!(set.remove(x), naive.remove(&x)),
                _ => {
                    let at_least = naive.iter().copied().find(|&v| v >= x);
                    assert_eq!(set.min_at_least(x), at_least);
                    let closest = naive.iter().map(|&v| v.abs_diff(x)).min();
                    assert_eq!(set.closest_distance(x), closest);
                }
            }
            assert_eq!(set.len(), naive.len());
        }
    }

    #[test]
    fn queen_placements_are_safe_and_counted() {
        let known = [1, 1, 0, 0, 2, 10, 4, 40, 92];
        for (n, &expected) in known.iter().enumerate() {
            let boards = n_queens(n);
            assert_eq!(boards.len() as u64, expected, "n={n}");
            assert_eq!(count_n_queens(n), expected, "n={n}");
            assert!(boards.windows(2).all(|w| w[0] < w[1]), "n={n}");
            for board in &boards {
                assert_eq!(board.len(), n);
                for (r1, &c1) in board.iter().enumerate() {
                    for (r2, &c2) in board.iter().enumerate().skip(r1 + 1) {
                        assert_ne!(c1, c2, "board={board:?}");
                        assert_ne!(r2 - r1, c1.abs_diff(c2), "board={board:?}");
                    }
                }
            }
        }
        assert_eq!(n_queens(4), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
        assert_eq!(count_n_queens(10), 724);
    }
}
