pub fn gcd_euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

pub fn gcd_binary(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            return a << shift;
        }
    }
}

/// Least common multiple, `None` when it does not fit in `u64`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd_binary(a, b)).checked_mul(b)
}

/// Modular inverse by the extended Euclidean algorithm.
///
/// Works for any modulus, prime or not; `None` when `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: u64, modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }
    let m = modulus as i128;
    let (mut old_r, mut r) = ((a as i128).rem_euclid(m), m);
    let (mut old_s, mut s) = (1_i128, 0_i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m) as u64)
}
