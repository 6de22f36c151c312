use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

/// Largest n whose factorial fits in a u64.
pub const MAX_EXACT_U64: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FactorialError {
    #[error("factorial undefined for negative number {0}")]
    Negative(i64),
    #[error("{0}! does not fit in 64 bits")]
    Overflow(i64),
}

pub fn factorial(n: i64) -> Result<u64, FactorialError> {
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    let mut f: u64 = 1;
    for i in 2..=n as u64 {
        f = f.checked_mul(i).ok_or(FactorialError::Overflow(n))?;
    }
    Ok(f)
}

/// Exact n! for any n.
pub fn factorial_big(n: u64) -> BigUint {
    let mut result = BigUint::one();
    for i in 2..=n {
        result *= i;
    }
    result
}
