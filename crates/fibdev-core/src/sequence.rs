//! Iterative Fibonacci recurrence over [`BigNum`].

use crate::bignum::BigNum;

/// Fibonacci number at index `k`.
///
/// Three working values are rotated through the recurrence, so no history
/// is kept. The result slot starts out holding `k` itself, which is the
/// correct answer for `k < 2` where the loop body never runs.
///
/// Values past [`MAX_EXACT_INDEX`](crate::constants::MAX_EXACT_INDEX) wrap
/// modulo `2^128`.
///
/// # Example
/// ```
/// use fibdev_core::sequence::fibonacci_at;
/// assert_eq!(u128::from(fibonacci_at(10)), 55);
/// ```
#[must_use]
pub fn fibonacci_at(k: u64) -> BigNum {
    let mut first = BigNum::ZERO;
    let mut second = BigNum::ONE;
    let mut next = BigNum::from(k);

    for _ in 2..=k {
        next = first.add(second);
        first = std::mem::replace(&mut second, next);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_EXACT_INDEX;

    #[test]
    fn seeded_slot_gives_base_terms() {
        assert_eq!(fibonacci_at(0), BigNum::ZERO);
        assert_eq!(fibonacci_at(1), BigNum::ONE);
    }

    #[test]
    fn small_values() {
        let expected: [u128; 11] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (k, want) in expected.iter().enumerate() {
            assert_eq!(u128::from(fibonacci_at(k as u64)), *want, "F({k})");
        }
        assert_eq!(u128::from(fibonacci_at(20)), 6765);
    }

    #[test]
    fn first_value_past_u64() {
        // F(94) = 19740274219868223167 > u64::MAX
        let v = fibonacci_at(94);
        assert_eq!(v.upper, 1);
        assert_eq!(u128::from(v), 19_740_274_219_868_223_167);
    }

    #[test]
    fn index_100() {
        assert_eq!(u128::from(fibonacci_at(100)), 354_224_848_179_261_915_075);
    }

    #[test]
    fn last_exact_index() {
        assert_eq!(
            u128::from(fibonacci_at(MAX_EXACT_INDEX)),
            332_825_110_087_067_562_321_196_029_789_634_457_848
        );
    }

    #[test]
    fn wraps_past_128_bits() {
        // F(187) mod 2^128
        assert_eq!(
            u128::from(fibonacci_at(MAX_EXACT_INDEX + 1)),
            198_239_973_509_362_327_032_045_173_661_212_819_077
        );
    }

    #[test]
    fn recurrence_holds() {
        for k in 0..150 {
            let sum = fibonacci_at(k).add(fibonacci_at(k + 1));
            assert_eq!(sum, fibonacci_at(k + 2), "F({k}) + F({}) != F({})", k + 1, k + 2);
        }
    }
}
