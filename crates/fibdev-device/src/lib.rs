//! # fibdev-device
//!
//! File-like access to the Fibonacci engine: one exclusive session at a time,
//! a cursor positioned by seeks clamped to `[0, MAX_LENGTH]`, reads that
//! return the value at the cursor, and writes that are acknowledged and
//! ignored.

pub mod device;
pub mod error;
pub mod seek;
pub mod session;

pub use device::{FibDevice, Session};
pub use error::DeviceError;
pub use seek::{seek_position, Whence};
pub use session::{SessionManager, SessionPermit};
