//! Opaque reference to the platform activity.

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

/// A non-owning reference to the host's current activity (an Android
/// `Activity` global ref, an iOS view controller, ...).
///
/// The crate only stores and hands back the address. It never dereferences
/// it and never extends the lifetime of the object behind it; that lifetime
/// belongs to the host.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityHandle(NonNull<c_void>);

// SAFETY: the handle is an opaque address that is never dereferenced here.
unsafe impl Send for ActivityHandle {}
unsafe impl Sync for ActivityHandle {}

impl ActivityHandle {
    /// Wraps a raw pointer coming across the FFI boundary.
    /// Returns `None` for null, which callers treat as "no activity".
    pub fn from_raw(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_raw(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

impl fmt::Debug for ActivityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivityHandle({:p})", self.0)
    }
}

#[cfg(test)]
pub(crate) fn test_handle(addr: usize) -> ActivityHandle {
    ActivityHandle::from_raw(std::ptr::without_provenance_mut(addr))
        .expect("test handle address must be non-zero")
}
