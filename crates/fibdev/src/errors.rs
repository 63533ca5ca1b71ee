//! Error handling and exit codes.

use fibdev_core::constants::exit_codes;
use fibdev_device::DeviceError;

/// Map a harness error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DeviceError>() {
        Some(DeviceError::Busy(_)) => exit_codes::ERROR_BUSY,
        Some(DeviceError::Engine(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
