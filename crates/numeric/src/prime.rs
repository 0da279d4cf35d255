/// Sieve of Eratosthenes; `is_prime[i]` for `0 <= i <= n`.
pub fn sieve(n: usize) -> Vec<bool> {
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    if n >= 1 {
        is_prime[1] = false;
    }

    let mut p = 2;
    while p * p <= n {
        if is_prime[p] {
            for multiple in (p * p..=n).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }
    is_prime
}

pub fn primes_up_to(n: usize) -> Vec<usize> {
    sieve(n)
        .into_iter()
        .enumerate()
        .filter_map(|(i, prime)| prime.then_some(i))
        .collect()
}
