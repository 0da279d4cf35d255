use std::collections::HashSet;
use std::ops::Range;

pub const MOD_A: u64 = 1_000_000_007;
pub const MOD_B: u64 = 998_244_353;
pub const BASE_A: u64 = 911_382_323;
pub const BASE_B: u64 = 972_663_749;

#[inline(always)]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (a as u128 * b as u128 % modulus as u128) as u64
}

/// Polynomial prefix hash `h(s) = s[0]·B^(n-1) + ... + s[n-1]` modulo `M`.
#[derive(Clone, Debug)]
pub struct PolyHash {
    modulus: u64,
    prefix: Vec<u64>,
    power: Vec<u64>,
}

impl PolyHash {
    pub fn new<I>(values: I, base: u64, modulus: u64) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        assert!(modulus > 1, "modulus must exceed 1");
        let base = base % modulus;
        let mut prefix = vec![0];
        let mut power = vec![1];
        for v in values {
            let last = prefix[prefix.len() - 1];
            prefix.push((mul_mod(last, base, modulus) + v % modulus) % modulus);
            let p = power[power.len() - 1];
            power.push(mul_mod(p, base, modulus));
        }
        Self {
            modulus,
            prefix,
            power,
        }
    }

    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// `B^k mod M` for `k <= len`.
    pub fn power(&self, k: usize) -> u64 {
        self.power[k]
    }

    pub fn hash(&self, range: Range<usize>) -> u64 {
        let m = self.modulus;
        let shifted = mul_mod(self.prefix[range.start], self.power[range.len()], m);
        (self.prefix[range.end] + m - shifted) % m
    }
}

/// Two independent [`PolyHash`]es over the raw bytes.
#[derive(Clone, Debug)]
pub struct DoubleHash {
    a: PolyHash,
    b: PolyHash,
}

impl DoubleHash {
    pub fn new(text: &[u8]) -> Self {
        let values = || text.iter().map(|&c| c as u64);
        Self {
            a: PolyHash::new(values(), BASE_A, MOD_A),
            b: PolyHash::new(values(), BASE_B, MOD_B),
        }
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    pub fn hash(&self, range: Range<usize>) -> (u64, u64) {
        (self.a.hash(range.clone()), self.b.hash(range))
    }
}

/// Length of the longest substring that occurs at least twice (occurrences
/// may overlap).
pub fn longest_repeated_substring(text: &[u8]) -> usize {
    let n = text.len();
    if n < 2 {
        return 0;
    }
    let hash = DoubleHash::new(text);
    let repeats = |len: usize| {
        let mut seen = HashSet::with_capacity(n - len + 1);
        (0..=n - len).any(|i| !seen.insert(hash.hash(i..i + len)))
    };

    let (mut ok, mut ng) = (0, n);
    while ng - ok > 1 {
        let mid = ok + (ng - ok) / 2;
        if repeats(mid) {
            ok = mid;
        } else {
            ng = mid;
        }
    }
    ok
}
