mod binomial;
mod digit;
mod game;
mod gcd;
mod modint;
mod prime;

pub use binomial::Binomial;
pub use digit::{digit_sum, digit_sum_total};
pub use game::{grundy_numbers, nim_sum, winning_positions};
pub use gcd::{gcd_binary, gcd_euclid, lcm, mod_inverse};
pub use modint::{ModInt, ModInt998244353, ModInt1000000007, mod_pow};
pub use prime::{primes_up_to, sieve};

pub const MOD_1E9_7: u64 = 1_000_000_007;
