//! Device errors.

use fibdev_core::FibError;

/// Errors returned by the device layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// Another session holds the device.
    #[error("device {0} is in use")]
    Busy(&'static str),

    /// The engine rejected the request.
    #[error(transparent)]
    Engine(#[from] FibError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            DeviceError::Busy("fibonacci").to_string(),
            "device fibonacci is in use"
        );
        let err: DeviceError = FibError::NegativeIndex(-2).into();
        assert_eq!(err.to_string(), "negative index: -2");
    }
}
