//! Decimal rendering of [`BigNum`] values.

use crate::bignum::BigNum;
use crate::constants::MAX_DIGITS;

/// Render `num` as ASCII decimal digits, most significant first.
///
/// Digits are peeled off the low end: while the upper limb is non-zero the
/// carry-aware [`BigNum::decimal_shift_right`] is used, after that plain
/// division of the lower limb. Zero renders as `"0"`. At most
/// [`MAX_DIGITS`] digits are produced.
///
/// # Example
/// ```
/// use fibdev_core::bignum::BigNum;
/// use fibdev_core::render::render_decimal;
/// assert_eq!(render_decimal(BigNum::from_limbs(1, 0)), "18446744073709551616");
/// ```
#[must_use]
pub fn render_decimal(mut num: BigNum) -> String {
    let mut digits = [0u8; MAX_DIGITS];
    let mut len = 0;

    while len < MAX_DIGITS {
        digits[len] = b'0' + num.low_digit();
        if num.upper != 0 {
            num = num.decimal_shift_right();
        } else {
            num.lower /= 10;
        }
        len += 1;
        if num.is_zero() {
            break;
        }
    }

    digits[..len].iter().rev().map(|&d| char::from(d)).collect()
}
