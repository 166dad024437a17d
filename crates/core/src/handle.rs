use std::ffi::c_void;
use std::fmt::{Formatter, Pointer, Result as FmtResult};

/// Opaque per-plugin handle supplied by the host.
///
/// The plugin never dereferences, allocates or frees it. It is only passed
/// back, unchanged, to host services that need to know which plugin is
/// calling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PluginHandle(*mut c_void);

impl PluginHandle {
    #[must_use]
    pub const fn from_raw(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    #[must_use]
    pub const fn as_raw(self) -> *mut c_void {
        self.0
    }

    #[must_use]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl Pointer for PluginHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Pointer::fmt(&self.0, f)
    }
}
