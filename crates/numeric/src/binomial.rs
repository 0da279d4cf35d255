use crate::modint::ModInt;

/// Factorial tables for `nCk mod M` queries with `n <= max_n`.
#[derive(Clone, Debug)]
pub struct Binomial<const M: u64> {
    fact: Vec<ModInt<M>>,
    inv_fact: Vec<ModInt<M>>,
}

impl<const M: u64> Binomial<M> {
    pub fn new(max_n: usize) -> Self {
        debug_assert!((max_n as u64) < M, "factorials vanish past the modulus");
        let mut fact = Vec::with_capacity(max_n + 1);
        fact.push(ModInt::new(1));
        for i in 1..=max_n {
            let prev = fact[i - 1];
            fact.push(prev * ModInt::from(i));
        }

        let mut inv_fact = vec![ModInt::new(1); max_n + 1];
        inv_fact[max_n] = fact[max_n].inv();
        for i in (1..=max_n).rev() {
            inv_fact[i - 1] = inv_fact[i] * ModInt::from(i);
        }

        Self { fact, inv_fact }
    }

    pub fn max_n(&self) -> usize {
        self.fact.len() - 1
    }

    pub fn factorial(&self, n: usize) -> ModInt<M> {
        self.fact[n]
    }

    pub fn choose(&self, n: usize, k: usize) -> ModInt<M> {
        if k > n {
            return ModInt::default();
        }
        self.fact[n] * self.inv_fact[k] * self.inv_fact[n - k]
    }
}
