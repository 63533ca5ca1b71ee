//! File-like device over a [`SequenceEngine`].
//!
//! `FibDevice` owns the engine and the session manager. `open` hands out a
//! [`Session`] holding the only permit; the session keeps a cursor that is
//! moved with [`Session::seek`] and read with [`Session::read`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use fibdev_core::constants::DEVICE_NAME;
use fibdev_core::{FibEngine, SequenceEngine};

use crate::error::DeviceError;
use crate::seek::{seek_position, Whence};
use crate::session::{SessionManager, SessionPermit};

/// A registered Fibonacci device.
#[derive(Clone)]
pub struct FibDevice {
    name: &'static str,
    engine: Arc<dyn SequenceEngine>,
    sessions: SessionManager,
}

impl FibDevice {
    /// Create a device backed by the given engine.
    #[must_use]
    pub fn new(engine: Arc<dyn SequenceEngine>) -> Self {
        Self {
            name: DEVICE_NAME,
            engine,
            sessions: SessionManager::new(),
        }
    }

    /// Device name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a session is currently open.
    #[must_use]
    pub fn in_use(&self) -> bool {
        self.sessions.is_active()
    }

    /// Open a session. Fails with [`DeviceError::Busy`] while another one is open.
    pub fn open(&self) -> Result<Session, DeviceError> {
        let Some(permit) = self.sessions.try_acquire() else {
            warn!(device = self.name, "device is in use");
            return Err(DeviceError::Busy(self.name));
        };
        info!(device = self.name, engine = self.engine.name(), "session opened");
        Ok(Session {
            device: self.name,
            engine: Arc::clone(&self.engine),
            position: 0,
            _permit: permit,
        })
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new(Arc::new(FibEngine::new()))
    }
}

/// An open session. Dropping it releases the device.
pub struct Session {
    device: &'static str,
    engine: Arc<dyn SequenceEngine>,
    position: i64,
    _permit: SessionPermit,
}

impl Session {
    /// Current cursor position.
    #[must_use]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Move the cursor and return the new, clamped position.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        self.position = seek_position(self.position, offset, whence);
        debug!(offset, ?whence, position = self.position, "seek");
        self.position
    }

    /// Decimal value at the current position.
    pub fn read_value(&self) -> Result<String, DeviceError> {
        Ok(self.engine.compute(self.position)?)
    }

    /// Copy the value at the current position into `buf`.
    ///
    /// Digits that do not fit are dropped. Returns the number of bytes copied.
    /// The cursor does not advance.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let value = self.read_value()?;
        let len = value.len().min(buf.len());
        buf[..len].copy_from_slice(&value.as_bytes()[..len]);
        Ok(len)
    }

    /// Hand `buf` to the engine. Always returns the engine's acknowledgement.
    pub fn write(&mut self, buf: &[u8]) -> usize {
        self.engine.write(buf)
    }

    /// Close the session, releasing the device.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(device = self.device, "session closed");
    }
}
