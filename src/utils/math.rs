/// Number of base-10 digits of `|n|`. Zero has one digit.
pub fn digit_count(n: i64) -> u32 {
    let mut t = n.unsigned_abs();
    if t == 0 {
        return 1;
    }
    let mut digits = 0;
    while t > 0 {
        t /= 10;
        digits += 1;
    }
    digits
}

/// Decimal digits of `n`, least significant first. Empty for zero.
pub fn digits_lsb(mut n: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        if n == 0 {
            return None;
        }
        let d = n % 10;
        n /= 10;
        Some(d)
    })
}

/// Digits of `n` in reverse order, read back as a number.
/// u128 holds the reversal of every u64.
pub fn reverse_digits(n: u64) -> u128 {
    digits_lsb(n).fold(0u128, |rev, d| rev * 10 + d as u128)
}

/// Splits a number into its hundreds, tens and units "digits" using truncating
/// division, so values outside 100..=999 yield out-of-range parts.
pub fn three_digits(num: i64) -> [i64; 3] {
    [num / 100, (num / 10) % 10, num % 10]
}

#[inline]
pub fn mul_mod_u64(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

#[inline]
pub fn pow_mod_u64(mut a: u64, mut e: u64, m: u64) -> u64 {
    let mut r: u64 = 1 % m;
    a %= m;
    while e > 0 {
        if (e & 1) == 1 { r = mul_mod_u64(r, a, m); }
        a = mul_mod_u64(a, a, m);
        e >>= 1;
    }
    r
}
