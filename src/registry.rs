//! Holder of the current activity handle.
//!
//! The host writes it from its lifecycle callbacks; native code reads it from
//! whatever thread answers a launch-argument query. A write that has returned
//! is visible to every later read.

use log::{debug, info};
use parking_lot::RwLock;

use crate::handle::ActivityHandle;

/// Stores at most one [`ActivityHandle`].
///
/// State is either `Present(handle)` or `Absent`; it starts `Absent` and only
/// changes through [`set`](Self::set), [`clear`](Self::clear) and
/// [`replace`](Self::replace).
#[derive(Debug, Default)]
pub struct ActivityHandleRegistry {
    slot: RwLock<Option<ActivityHandle>>,
}

impl ActivityHandleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Swaps the stored handle for `next` and returns what was there.
    pub fn replace(&self, next: Option<ActivityHandle>) -> Option<ActivityHandle> {
        std::mem::replace(&mut *self.slot.write(), next)
    }

    /// Stores `handle`, dropping any previous one.
    pub fn set(&self, handle: ActivityHandle) {
        if let Some(previous) = self.replace(Some(handle)) {
            debug!("[Registry] Replaced activity reference {:?}", previous);
        }
        info!("[Registry] Activity stored: {:?}", handle);
    }

    /// Forgets the stored handle. No-op when already empty.
    pub fn clear(&self) {
        if self.replace(None).is_some() {
            info!("[Registry] Activity reference cleared");
        }
    }

    /// The current handle, or `None` when no activity is attached.
    pub fn get(&self) -> Option<ActivityHandle> {
        *self.slot.read()
    }

    pub fn is_attached(&self) -> bool {
        self.slot.read().is_some()
    }
}
