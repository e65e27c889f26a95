//! Modular arithmetic shared by the affine and Caesar engines.

/// True mathematical modulo: the result is always in `[0, b)`.
///
/// The `%` operator is a remainder and goes negative for negative `a`,
/// which breaks decryption (`x - shift` underflows below the base).
pub fn modulo(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "modulus must be positive");
    let m = a % b;
    if m < 0 {
        m + b
    } else {
        m
    }
}

/// Classical iterative Euclidean algorithm.
pub fn gcd(mut m: i64, mut n: i64) -> i64 {
    while n != 0 {
        let r = modulo(m, n.abs());
        m = n;
        n = r;
    }
    m.abs()
}

/// Multiplicative inverse of `m` modulo `modulus`, found by linear search
/// over `2..=modulus`. Returns `None` when `gcd(m, modulus) != 1`.
pub fn inverse(m: i64, modulus: i64) -> Option<i64> {
    (2..=modulus).find(|&candidate| modulo(m * candidate, modulus) == 1)
}
