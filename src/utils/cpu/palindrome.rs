use crate::utils::math::reverse_digits;

/// Negative numbers never qualify: the sign takes no part in the digit comparison.
pub fn is_palindrome(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    if n == 0 {
        return true;
    }
    let n = n as u64;
    reverse_digits(n) == n as u128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert!(is_palindrome(0));
        assert!(is_palindrome(7));
        assert!(is_palindrome(121));
        assert!(is_palindrome(9009));
        assert!(!is_palindrome(123));
        assert!(!is_palindrome(10));
    }

    #[test]
    fn test_negative_is_not_palindrome() {
        assert!(!is_palindrome(-121));
        assert!(!is_palindrome(-1));
        assert!(!is_palindrome(i64::MIN));
    }

    #[test]
    fn test_trailing_zero_never_matches() {
        for n in (10i64..10_000).step_by(10) {
            assert!(!is_palindrome(n), "{n} ends in 0");
        }
    }

    #[test]
    fn test_large_values() {
        assert!(is_palindrome(1_234_567_887_654_321));
        // reversal of i64::MAX exceeds i64 without overflowing the check
        assert!(!is_palindrome(i64::MAX));
        assert!(!is_palindrome(1_999_999_999_999_999_999));
    }
}
