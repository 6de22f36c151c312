use crate::utils::math::{digit_count, digits_lsb};

/// `n` equals the sum of its digits each raised to the number of digits.
///
/// Powers are computed with exact integer arithmetic. The widest case is
/// nineteen digits of 9^19, which stays far inside u128.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let digits = digit_count(n);
    let sum: u128 = digits_lsb(n as u64)
        .map(|d| (d as u128).pow(digits))
        .sum();
    sum == n as u128
}
