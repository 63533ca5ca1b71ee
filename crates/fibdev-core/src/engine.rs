//! The `SequenceEngine` trait and its Fibonacci implementation.
//!
//! `SequenceEngine` is the seam consumed by the device layer: it turns an
//! index into a printable value and swallows writes. `FibEngine` is the
//! stateless implementation backed by [`fibonacci_at`] and
//! [`render_decimal`].

use tracing::{debug, trace};

use crate::constants::{MAX_EXACT_INDEX, WRITE_ACK};
use crate::render::render_decimal;
use crate::sequence::fibonacci_at;

/// Error type for engine requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index is below zero.
    #[error("negative index: {0}")]
    NegativeIndex(i64),
}

/// Engine consumed by the device layer.
pub trait SequenceEngine: Send + Sync {
    /// Decimal value of the term at `index`.
    fn compute(&self, index: i64) -> Result<String, FibError>;

    /// Accept a write. The content is ignored.
    fn write(&self, buf: &[u8]) -> usize;

    /// Get the name of this engine.
    fn name(&self) -> &str;
}

/// Fibonacci engine over two-limb 128-bit values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FibEngine;

impl FibEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SequenceEngine for FibEngine {
    fn compute(&self, index: i64) -> Result<String, FibError> {
        let k = u64::try_from(index).map_err(|_| FibError::NegativeIndex(index))?;
        if k > MAX_EXACT_INDEX {
            debug!(index = k, "index beyond 128-bit range, value wraps");
        }
        let value = render_decimal(fibonacci_at(k));
        trace!(index = k, digits = value.len(), "computed term");
        Ok(value)
    }

    fn write(&self, buf: &[u8]) -> usize {
        trace!(len = buf.len(), "write ignored");
        WRITE_ACK
    }

    fn name(&self) -> &'static str {
        "Fibonacci128"
    }
}
