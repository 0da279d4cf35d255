use std::marker::PhantomData;

pub trait Monoid {
    type Value: Clone;

    fn identity() -> Self::Value;
    fn op(a: &Self::Value, b: &Self::Value) -> Self::Value;
}

pub struct Sum<T>(PhantomData<T>);
pub struct Min<T>(PhantomData<T>);
pub struct Max<T>(PhantomData<T>);

macro_rules! impl_int_monoids {
    ($($ty:ty),*) => {
        $(
            impl Monoid for Sum<$ty> {
                type Value = $ty;

                #[inline]
                fn identity() -> $ty {
                    0
                }

                #[inline]
                fn op(a: &$ty, b: &$ty) -> $ty {
                    a + b
                }
            }

            impl Monoid for Min<$ty> {
                type Value = $ty;

                #[inline]
                fn identity() -> $ty {
                    <$ty>::MAX
                }

                #[inline]
                fn op(a: &$ty, b: &$ty) -> $ty {
                    *a.min(b)
                }
            }

            impl Monoid for Max<$ty> {
                type Value = $ty;

                #[inline]
                fn identity() -> $ty {
                    <$ty>::MIN
                }

                #[inline]
                fn op(a: &$ty, b: &$ty) -> $ty {
                    *a.max(b)
                }
            }
        )*
    };
}

impl_int_monoids!(i32, i64, u32, u64, usize);

/// Summary of the equal-byte runs at both ends of a segment.
///
/// The empty segment has `len == 0`; its `first` and `last` are meaningless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub first: u8,
    pub last: u8,
    /// Length of the run starting at the first byte.
    pub prefix: usize,
    /// Length of the run ending at the last byte.
    pub suffix: usize,
    pub len: usize,
}

impl RunSummary {
    pub fn single(byte: u8) -> Self {
        Self {
            first: byte,
            last: byte,
            prefix: 1,
            suffix: 1,
            len: 1,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.prefix == self.len
    }
}

/// Concatenation of [`RunSummary`]s.
pub struct Runs;

impl Monoid for Runs {
    type Value = RunSummary;

    fn identity() -> RunSummary {
        RunSummary::default()
    }

    fn op(a: &RunSummary, b: &RunSummary) -> RunSummary {
        if a.len == 0 {
            return *b;
        }
        if b.len == 0 {
            return *a;
        }
        let joined = a.last == b.first;
        RunSummary {
            first: a.first,
            last: b.last,
            prefix: if joined && a.is_uniform() { a.len + b.prefix } else { a.prefix },
            suffix: if joined && b.is_uniform() { b.len + a.suffix } else { b.suffix },
            len: a.len + b.len,
        }
    }
}
