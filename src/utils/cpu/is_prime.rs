use crate::utils::math::{mul_mod_u64, pow_mod_u64};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PrimeMethod {
    #[default]
    Trial,
    MillerRabin,
}

impl PrimeMethod {
    pub fn name(self) -> &'static str {
        match self {
            PrimeMethod::Trial => "trial",
            PrimeMethod::MillerRabin => "miller-rabin",
        }
    }
}

const SMALL_PRIMES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Trial division by odd numbers up to ⌊√n⌋.
pub fn is_prime(n: i64) -> bool {
    is_prime_with(n, PrimeMethod::Trial)
}

pub fn is_prime_with(n: i64, method: PrimeMethod) -> bool {
    if n <= 1 { return false; }
    if n == 2 { return true; }
    if n % 2 == 0 { return false; }
    let n = n as u64;

    match method {
        PrimeMethod::Trial => {
            // d <= n / d instead of d * d <= n: no overflow near i64::MAX
            let mut d = 3u64;
            while d <= n / d {
                if n % d == 0 { return false; }
                d += 2;
            }
            true
        }
        PrimeMethod::MillerRabin => {
            for &p in SMALL_PRIMES.iter() {
                if n % p == 0 { return n == p; }
            }
            miller_rabin_u64(n)
        }
    }
}

// Deterministic Miller–Rabin for u64 with known bases.
fn miller_rabin_u64(n: u64) -> bool {
    // decompose n-1 = d * 2^s
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 { d >>= 1; s += 1; }

    let bases: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

    'outer: for &a in &bases {
        let a = a % n;
        if a == 0 { continue; }
        let mut x = pow_mod_u64(a, d, n);
        if x == 1 || x == n - 1 { continue 'outer; }
        for _ in 1..s {
            x = mul_mod_u64(x, x, n);
            if x == n - 1 { continue 'outer; }
        }
        return false;
    }
    true
}
