mod bitdp;
mod grid;
mod kadane;
mod knapsack;
mod pattern;
mod sequence;
mod steps;
mod subset;

pub use bitdp::tsp_bitdp;
pub use grid::{min_path_sum, unique_paths_with_obstacles};
pub use kadane::max_subarray_sum;
pub use knapsack::{knapsack_by_value, knapsack_by_weight};
pub use pattern::{decode_ways, regex_match, wildcard_match};
pub use sequence::{edit_distance, lcs_length, lis_length};
pub use steps::{one_or_two_step_min_cost, one_or_two_step_route};
pub use subset::subset_sum;

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn subsets(n: usize) -> impl Iterator<Item = Vec<usize>> {
        (0..1_usize << n).map(move |mask| (0..n).filter(|&i| mask >> i & 1 == 1).collect())
    }

    #[test]
    fn dungeon_costs_and_route() {
        assert_eq!(one_or_two_step_min_cost(&[2, 4, 1, 3], &[5, 3, 7]), 8);
        let (cost, route) = one_or_two_step_route(&[2, 4, 1, 3], &[5, 3, 7]);
        assert_eq!(cost, 8);
        assert_eq!(route, vec![0, 1, 3, 4]);
        assert_eq!(one_or_two_step_min_cost(&[], &[]), 0);
        assert_eq!(one_or_two_step_route(&[], &[]), (0, vec![0]));
    }

    #[test]
    fn subset_sum_matches_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5B5E_0001);
        for _ in 0..200 {
            let n = rng.random_range(0..9);
            let values: Vec<usize> = (0..n).map(|_| rng.random_range(1..=12)).collect();
            let target = rng.random_range(0..=40);
            let exists = subsets(n).any(|s| s.iter().map(|&i| values[i]).sum::<usize>() == target);
            match subset_sum(&values, target) {
                Some(chosen) => {
                    assert!(exists);
                    assert!(chosen.windows(2).all(|w| w[0] < w[1]));
                    assert_eq!(chosen.iter().map(|&i| values[i]).sum::<usize>(), target);
                }
                None => assert!(!exists, "values={values:?} target={target}"),
            }
        }
    }

    #[test]
    fn knapsacks_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x4A95_0001);
        for _ in 0..200 {
            let n = rng.random_range(0..9);
            let items: Vec<(usize, u64)> = (0..n)
                .map(|_| (rng.random_range(1..=10), rng.random_range(0..=20)))
                .collect();
            let capacity = rng.random_range(0..=30);
            let expected = subsets(n)
                .filter(|s| s.iter().map(|&i| items[i].0).sum::<usize>() <= capacity)
                .map(|s| s.iter().map(|&i| items[i].1).sum::<u64>())
                .max()
                .unwrap();
            assert_eq!(knapsack_by_weight(&items, capacity), expected);

            let swapped: Vec<(u64, usize)> = items.iter().map(|&(w, v)| (w as u64, v as usize)).collect();
            assert_eq!(knapsack_by_value(&swapped, capacity as u64), expected as usize);
        }
        assert_eq!(knapsack_by_value(&[(3, 3), (4, 4), (5, 5)], 1_000_000_000), 12);
    }

    #[test]
    fn sequence_dps() {
        assert_eq!(edit_distance(b"tokyo", b"kyoto"), 4);
        assert_eq!(edit_distance(b"horse", b"ros"), 3);
        assert_eq!(edit_distance(b"intention", b"execution"), 5);
        assert_eq!(edit_distance(b"", b"abc"), 3);
        assert_eq!(lcs_length(b"abcde", b"ace"), 3);
        assert_eq!(lcs_length(b"abc", b"def"), 0);

        assert_eq!(lis_length(&[10, 9, 2, 5, 3, 7, 101, 18], true), 4);
        assert_eq!(lis_length(&[7, 7, 7, 7], true), 1);
        assert_eq!(lis_length(&[7, 7, 7, 7], false), 4);
        assert_eq!(lis_length::<i32>(&[], true), 0);
    }

    #[test]
    fn lis_matches_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x1150_0001);
        for _ in 0..200 {
            let n = rng.random_range(0..11);
            let seq: Vec<i32> = (0..n).map(|_| rng.random_range(0..5)).collect();
            for strict in [true, false] {
                let expected = subsets(n)
                    .filter(|s| {
                        s.windows(2).all(|w| {
                            if strict { seq[w[0]] < seq[w[1]] } else { seq[w[0]] <= seq[w[1]] }
                        })
                    })
                    .map(|s| s.len())
                    .max()
                    .unwrap();
                assert_eq!(lis_length(&seq, strict), expected, "{seq:?} strict={strict}");
            }
        }
    }

    #[test]
    fn tsp_bitdp_matches_permutations() {
        let mut rng = StdRng::seed_from_u64(0x7590_0002);
        for n in 1..=7 {
            let points: Vec<(f64, f64)> = (0..n)
                .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
                .collect();
            let dist: Vec<Vec<f64>> = points
                .iter()
                .map(|a| points.iter().map(|b| (a.0 - b.0).hypot(a.1 - b.1)).collect())
                .collect();

            let mut perm: Vec<usize> = (1..n).collect();
            let mut best = f64::INFINITY;
            permute(&mut perm, 0, &mut |p| {
                let mut len = 0.0;
                let mut prev = 0;
                for &v in p {
                    len += dist[prev][v];
                    prev = v;
                }
                len += dist[prev][0];
                best = best.min(len);
            });
            let got = tsp_bitdp(&dist).unwrap();
            assert!((got - best).abs() < 1e-9, "n={n} got={got} best={best}");
        }
        assert_eq!(tsp_bitdp(&[]), None);
    }

    fn permute(items: &mut Vec<usize>, k: usize, visit: &mut dyn FnMut(&[usize])) {
        if k == items.len() {
            visit(items);
            return;
        }
        for i in k..items.len() {
            items.swap(k, i);
            permute(items, k + 1, visit);
            items.swap(k, i);
        }
    }

    #[test]
    fn grid_paths() {
        let blocked = vec![
            vec![false, false, false],
            vec![false, true, false],
            vec![false, false, false],
        ];
        assert_eq!(unique_paths_with_obstacles(&blocked), 2);
        assert_eq!(unique_paths_with_obstacles(&[vec![true]]), 0);
        assert_eq!(unique_paths_with_obstacles(&[]), 0);

        let grid = vec![vec![1, 3, 1], vec![1, 5, 1], vec![4, 2, 1]];
        assert_eq!(min_path_sum(&grid), Some(7));
        assert_eq!(min_path_sum(&[]), None);
    }

    #[test]
    fn string_patterns() {
        assert!(!wildcard_match(b"aa", b"a"));
        assert!(wildcard_match(b"aa", b"*"));
        assert!(!wildcard_match(b"cb", b"?a"));
        assert!(wildcard_match(b"adceb", b"*a*b"));
        assert!(!wildcard_match(b"acdcb", b"a*c?b"));
        assert!(wildcard_match(b"", b"***"));

        assert!(!regex_match(b"aa", b"a"));
        assert!(regex_match(b"aa", b"a*"));
        assert!(regex_match(b"ab", b".*"));
        assert!(regex_match(b"aab", b"c*a*b"));
        assert!(!regex_match(b"mississippi", b"mis*is*p*."));

        assert_eq!(decode_ways(b"12"), 2);
        assert_eq!(decode_ways(b"226"), 3);
        assert_eq!(decode_ways(b"06"), 0);
        assert_eq!(decode_ways(b"10"), 1);
    }

    #[test]
    fn max_subarray_sum_matches_all_ranges() {
        let mut rng = StdRng::seed_from_u64(0x6A1D_0053);
        assert_eq!(max_subarray_sum(&[]), None);
        assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
        assert_eq!(max_subarray_sum(&[-3, -1, -2]), Some(-1));
        for _ in 0..200 {
            let n = rng.random_range(1..=12);
            let values: Vec<i64> = (0..n).map(|_| rng.random_range(-10..=10)).collect();
            let naive = (0..n)
                .flat_map(|l| (l + 1..=n).map(move |r| (l, r)))
                .map(|(l, r)| values[l..r].iter().sum::<i64>())
                .max();
            assert_eq!(max_subarray_sum(&values), naive, "values={values:?}");
        }
    }
}
