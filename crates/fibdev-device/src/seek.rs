//! Cursor positioning.
//!
//! Positions are indices into the sequence, not byte offsets. Every result
//! is clamped to `[0, MAX_LENGTH]`, so the engine never sees a negative index
//! through a session.

use fibdev_core::MAX_LENGTH;

/// Reference point for a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Absolute position.
    Set,
    /// Relative to the current position.
    Current,
    /// Counted back from `MAX_LENGTH`.
    End,
}

impl TryFrom<i32> for Whence {
    type Error = i32;

    /// Map the `SEEK_SET`/`SEEK_CUR`/`SEEK_END` numbering.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Set),
            1 => Ok(Self::Current),
            2 => Ok(Self::End),
            other => Err(other),
        }
    }
}

/// New cursor position for a seek of `offset` from `whence`.
///
/// `End` positions are `MAX_LENGTH - offset`. The result is clamped to
/// `[0, MAX_LENGTH]`.
///
/// # Example
/// ```
/// use fibdev_device::seek::{seek_position, Whence};
/// assert_eq!(seek_position(0, 7, Whence::Set), 7);
/// assert_eq!(seek_position(0, 150, Whence::Set), 100);
/// assert_eq!(seek_position(0, 10, Whence::End), 90);
/// ```
#[must_use]
pub fn seek_position(current: i64, offset: i64, whence: Whence) -> i64 {
    let target = match whence {
        Whence::Set => offset,
        Whence::Current => current.saturating_add(offset),
        Whence::End => MAX_LENGTH.saturating_sub(offset),
    };
    target.clamp(0, MAX_LENGTH)
}
