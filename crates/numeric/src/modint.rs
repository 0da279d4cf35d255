use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub type ModInt1000000007 = ModInt<1_000_000_007>;
pub type ModInt998244353 = ModInt<998_244_353>;

/// `base^exp mod modulus` by square-and-multiply.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    debug_assert!(modulus > 0);
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut acc = 1_u128;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    acc as u64
}

/// Residue modulo a compile-time modulus `M` (`1 < M < 2^63`).
///
/// Division and [`ModInt::inv`] use Fermat's little theorem, so they are only
/// meaningful when `M` is prime.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModInt<const M: u64> {
    value: u64,
}

impl<const M: u64> ModInt<M> {
    pub const MODULUS: u64 = M;

    pub const fn new(value: u64) -> Self {
        Self { value: value % M }
    }

    pub fn from_signed(value: i64) -> Self {
        Self {
            value: (value as i128).rem_euclid(M as i128) as u64,
        }
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.value
    }

    pub fn pow(self, exp: u64) -> Self {
        Self {
            value: mod_pow(self.value, exp, M),
        }
    }

    pub fn inv(self) -> Self {
        debug_assert!(self.value != 0, "zero has no inverse");
        self.pow(M - 2)
    }
}

impl<const M: u64> From<u64> for ModInt<M> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const M: u64> From<usize> for ModInt<M> {
    fn from(value: usize) -> Self {
        Self::new(value as u64)
    }
}

impl<const M: u64> From<i64> for ModInt<M> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const M: u64> fmt::Display for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<const M: u64> fmt::Debug for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, M)
    }
}

impl<const M: u64> Add for ModInt<M> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut value = self.value + rhs.value;
        if value >= M {
            value -= M;
        }
        Self { value }
    }
}

impl<const M: u64> Sub for ModInt<M> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let value = if self.value >= rhs.value {
            self.value - rhs.value
        } else {
            self.value + M - rhs.value
        };
        Self { value }
    }
}

impl<const M: u64> Mul for ModInt<M> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: (self.value as u128 * rhs.value as u128 % M as u128) as u64,
        }
    }
}

impl<const M: u64> Div for ModInt<M> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl<const M: u64> Neg for ModInt<M> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::default() - self
    }
}

macro_rules! impl_assign {
    ($($trait:ident $method:ident $op:tt),*) => {
        $(
            impl<const M: u64> $trait for ModInt<M> {
                #[inline]
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign!(AddAssign add_assign +, SubAssign sub_assign -, MulAssign mul_assign *, DivAssign div_assign /);

impl<const M: u64> Sum for ModInt<M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
