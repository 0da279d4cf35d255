//! Traveling-salesman heuristics on Euclidean points: a nearest-neighbour
//! construction followed by 2-opt local search.
//!
//! Tours are permutations of point indices; the closing edge back to
//! `tour[0]` is implicit.

const EPS: f64 = 1e-9;

pub type Point = (i64, i64);

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    dx.hypot(dy)
}

pub fn tour_length(points: &[Point], tour: &[usize]) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    let closing = distance(points[tour[tour.len() - 1]], points[tour[0]]);
    tour.windows(2)
        .map(|w| distance(points[w[0]], points[w[1]]))
        .sum::<f64>()
        + closing
}

/// Greedy tour from point 0, always moving to the closest unvisited point
/// (smallest index on ties).
pub fn nearest_neighbor_tour(points: &[Point]) -> Vec<usize> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    tour.push(0);

    for _ in 1..n {
        let mut next = usize::MAX;
        let mut best = f64::INFINITY;
        for (j, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = distance(points[current], points[j]);
            if d < best {
                best = d;
                next = j;
            }
        }
        visited[next] = true;
        tour.push(next);
        current = next;
    }
    tour
}

/// Reverses segments while doing so shortens the tour. `tour[0]` stays put.
///
/// Returns the number of improving moves applied.
pub fn two_opt(points: &[Point], tour: &mut [usize]) -> usize {
    let n = tour.len();
    if n < 4 {
        return 0;
    }

    let mut moves = 0;
    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 1 {
            for j in i + 1..n {
                let a = points[tour[i - 1]];
                let b = points[tour[i]];
                let c = points[tour[j]];
                let d = points[tour[(j + 1) % n]];
                let before = distance(a, b) + distance(c, d);
                let after = distance(a, c) + distance(b, d);
                if after + EPS < before {
                    tour[i..=j].reverse();
                    moves += 1;
                    improved = true;
                }
            }
        }
    }
    moves
}
