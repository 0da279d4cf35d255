//! Area covered by at least one of N rectangles with corners in `0..=1500`.

use proconio::input;
use proconio::source::once::OnceSource;
use range_query::Difference2d;

const MAX_COORD: usize = 1500;

pub fn solve(input: &str) -> String {
    input! {
        from OnceSource::from(input),
        n: usize,
        rects: [(usize, usize, usize, usize); n],
    }

    let mut cover = Difference2d::new(MAX_COORD, MAX_COORD);
    for (a, b, c, d) in rects {
        cover.add(a..c, b..d, 1);
    }
    let area: usize = cover
        .build()
        .iter()
        .map(|row| row.iter().filter(|&&layers| layers > 0).count())
        .sum();
    area.to_string()
}
