//! Services the autorun host provides to native plugins.

use crate::constants::{MKDIR_SYMBOL, READ_SYMBOL, VERSION_SYMBOL};
use crate::error::{PluginError, Result};
use crate::handle::PluginHandle;

/// Host-side services a plugin can call back into.
///
/// `print` and `write` are the services every host provides. The remaining
/// methods default to [`PluginError::Unsupported`] so minimal hosts and test
/// doubles only implement what they need.
pub trait HostServices {
    /// Surface a message on the host console.
    fn print(&self, message: &str) -> Result<()>;

    /// Persist `content` at `path` inside the sandbox identified by `handle`.
    fn write(&self, handle: PluginHandle, path: &str, content: &[u8]) -> Result<()>;

    /// Read the whole file at `path` inside the sandbox identified by `handle`.
    fn read(&self, _handle: PluginHandle, _path: &str) -> Result<Vec<u8>> {
        Err(PluginError::Unsupported(READ_SYMBOL))
    }

    /// Create `path` and any missing parents inside the sandbox.
    fn mkdir(&self, _handle: PluginHandle, _path: &str) -> Result<()> {
        Err(PluginError::Unsupported(MKDIR_SYMBOL))
    }

    /// Host version string.
    fn version(&self) -> Result<String> {
        Err(PluginError::Unsupported(VERSION_SYMBOL))
    }
}

impl<T: HostServices + ?Sized> HostServices for &T {
    fn print(&self, message: &str) -> Result<()> {
        (**self).print(message)
    }

    fn write(&self, handle: PluginHandle, path: &str, content: &[u8]) -> Result<()> {
        (**self).write(handle, path, content)
    }

    fn read(&self, handle: PluginHandle, path: &str) -> Result<Vec<u8>> {
        (**self).read(handle, path)
    }

    fn mkdir(&self, handle: PluginHandle, path: &str) -> Result<()> {
        (**self).mkdir(handle, path)
    }

    fn version(&self) -> Result<String> {
        (**self).version()
    }
}
