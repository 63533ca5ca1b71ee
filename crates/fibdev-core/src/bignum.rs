//! Fixed-width 128-bit unsigned integer stored as two 64-bit limbs.
//!
//! Only the two operations the Fibonacci engine needs are provided:
//! addition with carry propagation and division by ten across the limb
//! boundary. Neither ever widens past 64 bits, so both stay cheap and
//! overflow-free; a sum that exceeds 128 bits wraps silently.

use std::fmt;
use std::ops::Add;

/// `(2^64 - 1) / 10`, the share of one unit of the upper limb that lands in
/// the lower limb when dividing by ten.
const LIMB_TENTH: u64 = u64::MAX / 10;

/// `2^64 mod 10`.
const LIMB_MOD_TEN: u64 = 6;

/// A 128-bit magnitude, `upper * 2^64 + lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigNum {
    /// Least significant 64 bits.
    pub lower: u64,
    /// Most significant 64 bits.
    pub upper: u64,
}

impl BigNum {
    /// The value zero.
    pub const ZERO: Self = Self { lower: 0, upper: 0 };

    /// The value one.
    pub const ONE: Self = Self { lower: 1, upper: 0 };

    /// Build a value from its limbs.
    #[must_use]
    pub const fn from_limbs(upper: u64, lower: u64) -> Self {
        Self { lower, upper }
    }

    /// Whether both limbs are zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.lower == 0 && self.upper == 0
    }

    /// Sum of `self` and `other`.
    ///
    /// A carry out of the lower limb is detected by comparing `other.lower`
    /// against the complement of `self.lower`. Overflow of the upper limb is
    /// not checked and wraps.
    ///
    /// # Example
    /// ```
    /// use fibdev_core::bignum::BigNum;
    /// let a = BigNum::from_limbs(0, u64::MAX);
    /// assert_eq!(a.add(BigNum::ONE), BigNum::from_limbs(1, 0));
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, other: Self) -> Self {
        let mut upper = self.upper.wrapping_add(other.upper);
        if other.lower > !self.lower {
            upper = upper.wrapping_add(1);
        }
        Self {
            lower: self.lower.wrapping_add(other.lower),
            upper,
        }
    }

    /// Quotient of `self / 10`.
    ///
    /// The remainder of the upper limb is redistributed into the lower limb
    /// as `upper_rem * ((2^64 - 1) / 10)`, with the leftover `upper_rem * 6`
    /// (because `2^64 mod 10 == 6`) folded into the lower limb's own
    /// remainder. Every intermediate stays below `2^64`.
    #[must_use]
    pub const fn decimal_shift_right(self) -> Self {
        let upper_rem = self.upper % 10;
        let lower_rem = self.lower % 10;
        Self {
            upper: self.upper / 10,
            lower: self.lower / 10
                + upper_rem * LIMB_TENTH
                + (lower_rem + upper_rem * LIMB_MOD_TEN) / 10,
        }
    }

    /// Least significant decimal digit, `self % 10`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn low_digit(self) -> u8 {
        if self.upper != 0 {
            ((self.lower % 10 + (self.upper % 10) * LIMB_MOD_TEN) % 10) as u8
        } else {
            (self.lower % 10) as u8
        }
    }
}

impl Add for BigNum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        BigNum::add(self, rhs)
    }
}

impl From<u64> for BigNum {
    fn from(lower: u64) -> Self {
        Self { lower, upper: 0 }
    }
}

impl From<u128> for BigNum {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u128) -> Self {
        Self {
            lower: value as u64,
            upper: (value >> 64) as u64,
        }
    }
}

impl From<BigNum> for u128 {
    fn from(value: BigNum) -> Self {
        (u128::from(value.upper) << 64) | u128::from(value.lower)
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&crate::render::render_decimal(*self))
    }
}
