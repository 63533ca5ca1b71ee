//! # fibdev-core
//!
//! Fibonacci engine over a fixed-width 128-bit number made of two 64-bit
//! limbs. Provides the limb arithmetic, the iterative recurrence, the
//! carry-aware decimal renderer, and the [`SequenceEngine`] seam consumed by
//! the device layer.

pub mod bignum;
pub mod constants;
pub mod engine;
pub mod render;
pub mod sequence;

// Re-exports
pub use bignum::BigNum;
pub use constants::{exit_codes, MAX_DIGITS, MAX_EXACT_INDEX, MAX_LENGTH, WRITE_ACK};
pub use engine::{FibEngine, FibError, SequenceEngine};
pub use render::render_decimal;
pub use sequence::fibonacci_at;

/// Decimal string of F(k).
///
/// # Example
/// ```
/// assert_eq!(fibdev_core::fibonacci(10), "55");
/// assert_eq!(fibdev_core::fibonacci(0), "0");
/// ```
#[must_use]
pub fn fibonacci(k: u64) -> String {
    render_decimal(fibonacci_at(k))
}
