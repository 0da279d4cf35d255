use bench::apply_runtime_config_for_size;
use bench::default_rng;
use bench::random_text;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use rand::Rng;
use std::hint::black_box;
use strings::HashedPalindrome;
use strings::Manacher;
use strings::PalindromeIndex;

const SIZES: [usize; 3] = [1_024, 16_384, 100_000];

fn generate_queries<R: Rng + ?Sized>(rng: &mut R, n: usize, q: usize) -> Vec<(usize, usize)> {
    (0..q)
        .map(|_| {
            let l = rng.random_range(0..n);
            let r = rng.random_range((l + 1)..=n);
            (l, r)
        })
        .collect()
}

fn bench_impl<M, P>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    text: &[u8],
    queries: &[(usize, usize)],
) where
    M: Measurement,
    P: PalindromeIndex,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let index = P::new(black_box(text));
            let mut hits = 0_usize;
            for &(l, r) in queries {
                hits += index.is_palindrome(black_box(l)..black_box(r)) as usize;
            }
            black_box(hits);
        })
    });
}

fn bench_palindrome(c: &mut Criterion) {
    let mut rng = default_rng();

    for alphabet in [2_u8, 26] {
        let mut group = c.benchmark_group(format!("strings/palindrome/alphabet_{alphabet}"));
        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let text = random_text(&mut rng, size, alphabet);
            let queries = generate_queries(&mut rng, size, size);

            bench_impl::<_, Manacher>(&mut group, "manacher", size, &text, &queries);
            bench_impl::<_, HashedPalindrome>(&mut group, "double_hash", size, &text, &queries);
        }
        group.finish();
    }
}

criterion_group!(benches, bench_palindrome);
criterion_main!(benches);
