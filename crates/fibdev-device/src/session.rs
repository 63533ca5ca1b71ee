//! Single-permit session manager.
//!
//! At most one session may hold the device. A permit is taken without
//! blocking and given back when the [`SessionPermit`] is dropped, so every
//! exit path of a session releases it.

use std::sync::Arc;

use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex};

/// Hands out the single session permit.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    lock: Arc<Mutex<()>>,
}

/// Proof that the holder owns the device. Released on drop.
pub struct SessionPermit {
    _guard: ArcMutexGuard<RawMutex, ()>,
}

impl std::fmt::Debug for SessionPermit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionPermit").finish_non_exhaustive()
    }
}

impl SessionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the permit, or `None` if a session already holds it.
    #[must_use]
    pub fn try_acquire(&self) -> Option<SessionPermit> {
        self.lock
            .try_lock_arc()
            .map(|guard| SessionPermit { _guard: guard })
    }

    /// Whether a session currently holds the permit.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lock.is_locked()
    }
}
