//! Limits and fixed values shared by the engine and the device layer.

/// Highest index a session cursor may be positioned at.
pub const MAX_LENGTH: i64 = 100;

/// Upper bound on the number of digits the renderer will emit.
///
/// A 128-bit value has at most 39 decimal digits; the bound only guards
/// against a runaway loop.
pub const MAX_DIGITS: usize = 44;

/// Largest index whose Fibonacci value fits in 128 bits.
///
/// F(186) = 332,825,110,087,067,562,321,196,029,789,634,457,848.
/// F(187) exceeds `u128::MAX` and wraps silently.
pub const MAX_EXACT_INDEX: u64 = 186;

/// Value returned for every write, whatever was written.
pub const WRITE_ACK: usize = 1;

/// Registered device name.
pub const DEVICE_NAME: &str = "fibonacci";

/// Path the harness reports reads and writes against.
pub const DEVICE_PATH: &str = "/dev/fibonacci";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Device already has an active session (EBUSY).
    pub const ERROR_BUSY: i32 = 16;
}
