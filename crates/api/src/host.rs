//! Host services resolved from the symbols the autorun host exports.

use std::ffi::{CStr, CString, c_char, c_int, c_void};

use autorun_plugin_core::constants::{
    MKDIR_SYMBOL, PRINT_SYMBOL, READ_SIZE_SYMBOL, READ_SYMBOL, STATUS_NULL_HANDLE, VERSION_SYMBOL,
    WRITE_SYMBOL,
};
use autorun_plugin_core::{HostServices, PluginError, PluginHandle, Result};
use libloading::Library;

pub type WriteFn = unsafe extern "C" fn(
    plugin_handle: *mut c_void,
    path: *const c_char,
    content: *const c_char,
    content_len: usize,
) -> c_int;

pub type PrintFn = unsafe extern "C" fn(message: *const c_char);

pub type ReadFn = unsafe extern "C" fn(
    plugin_handle: *mut c_void,
    path: *const c_char,
    buffer: *mut u8,
    buffer_size: usize,
) -> c_int;

pub type ReadSizeFn = unsafe extern "C" fn(plugin_handle: *mut c_void, path: *const c_char) -> c_int;

pub type MkdirFn = unsafe extern "C" fn(plugin_handle: *mut c_void, path: *const c_char) -> c_int;

pub type VersionFn = unsafe extern "C" fn() -> *const c_char;

/// Raw entry points of the host services.
///
/// Only `write` must exist. Every other service is optional, so a host that
/// does not export `autorun_print` still runs hooks that only write.
#[derive(Debug, Clone, Copy)]
pub struct HostFunctions {
    pub write: WriteFn,
    pub print: Option<PrintFn>,
    pub read: Option<ReadFn>,
    pub read_size: Option<ReadSizeFn>,
    pub mkdir: Option<MkdirFn>,
    pub version: Option<VersionFn>,
}

/// Host services available to a plugin, backed by host function pointers.
#[derive(Debug)]
pub struct AutorunApi {
    functions: HostFunctions,
    // Keeps the process handle open for as long as the pointers are used.
    _library: Option<Library>,
}

impl AutorunApi {
    /// Resolves the host services from the running process.
    pub fn load() -> Result<Self> {
        let library = open_self()?;
        let functions = HostFunctions {
            write: required(&library, WRITE_SYMBOL)?,
            print: optional(&library, PRINT_SYMBOL),
            read: optional(&library, READ_SYMBOL),
            read_size: optional(&library, READ_SIZE_SYMBOL),
            mkdir: optional(&library, MKDIR_SYMBOL),
            version: optional(&library, VERSION_SYMBOL),
        };
        tracing::debug!(
            print = functions.print.is_some(),
            read = functions.read.is_some(),
            mkdir = functions.mkdir.is_some(),
            version = functions.version.is_some(),
            "resolved host services"
        );
        Ok(Self { functions, _library: Some(library) })
    }

    /// Wraps host function pointers the caller already has.
    ///
    /// The pointers must follow the autorun C ABI and stay valid for the
    /// lifetime of the returned value.
    #[must_use]
    pub const fn from_functions(functions: HostFunctions) -> Self {
        Self { functions, _library: None }
    }
}

#[cfg(unix)]
fn open_self() -> Result<Library> {
    Ok(libloading::os::unix::Library::this().into())
}

#[cfg(windows)]
fn open_self() -> Result<Library> {
    libloading::os::windows::Library::this()
        .map(Into::into)
        .map_err(|e| PluginError::HostSymbol { symbol: "<process>", reason: e.to_string() })
}

fn required<T: Copy>(library: &Library, symbol: &'static str) -> Result<T> {
    // SAFETY: T is one of the function pointer types above, matching the host's exports.
    let sym = unsafe { library.get::<T>(symbol.as_bytes()) }
        .map_err(|e| PluginError::HostSymbol { symbol, reason: e.to_string() })?;
    Ok(*sym)
}

fn optional<T: Copy>(library: &Library, symbol: &'static str) -> Option<T> {
    match required(library, symbol) {
        Ok(f) => Some(f),
        Err(e) => {
            tracing::debug!(symbol, error = %e, "optional host service not available");
            None
        },
    }
}

impl HostServices for AutorunApi {
    fn print(&self, message: &str) -> Result<()> {
        let print = self.functions.print.ok_or(PluginError::Unsupported(PRINT_SYMBOL))?;
        let message = CString::new(message)?;
        // SAFETY: the host reads a NUL-terminated string valid for the call.
        unsafe { print(message.as_ptr()) };
        Ok(())
    }

    fn write(&self, handle: PluginHandle, path: &str, content: &[u8]) -> Result<()> {
        let c_path = CString::new(path)?;
        // SAFETY: content is passed with its exact length and may contain NUL bytes.
        let status = unsafe {
            (self.functions.write)(
                handle.as_raw(),
                c_path.as_ptr(),
                content.as_ptr().cast::<c_char>(),
                content.len(),
            )
        };
        PluginError::check_status("write", path, status)
    }

    fn read(&self, handle: PluginHandle, path: &str) -> Result<Vec<u8>> {
        let (Some(read), Some(read_size)) = (self.functions.read, self.functions.read_size) else {
            let missing = if self.functions.read.is_none() { READ_SYMBOL } else { READ_SIZE_SYMBOL };
            return Err(PluginError::Unsupported(missing));
        };
        let c_path = CString::new(path)?;

        // SAFETY: handle and path are forwarded as the host expects.
        let size = unsafe { read_size(handle.as_raw(), c_path.as_ptr()) };
        let size = usize::try_from(size).map_err(|_| read_failure(path, size))?;

        let mut buffer = vec![0_u8; size];
        // SAFETY: buffer holds exactly `size` writable bytes.
        let read_len = unsafe { read(handle.as_raw(), c_path.as_ptr(), buffer.as_mut_ptr(), size) };
        let read_len = usize::try_from(read_len).map_err(|_| read_failure(path, read_len))?;

        buffer.truncate(read_len);
        Ok(buffer)
    }

    fn mkdir(&self, handle: PluginHandle, path: &str) -> Result<()> {
        let mkdir = self.functions.mkdir.ok_or(PluginError::Unsupported(MKDIR_SYMBOL))?;
        let c_path = CString::new(path)?;
        // SAFETY: handle and path are forwarded as the host expects.
        let status = unsafe { mkdir(handle.as_raw(), c_path.as_ptr()) };
        PluginError::check_status("mkdir", path, status)
    }

    fn version(&self) -> Result<String> {
        let version = self.functions.version.ok_or(PluginError::Unsupported(VERSION_SYMBOL))?;
        // SAFETY: the host returns a static NUL-terminated string or null.
        let ptr = unsafe { version() };
        if ptr.is_null() {
            return Err(PluginError::InvalidVersion);
        }
        // SAFETY: checked non-null above; the string outlives this call.
        let version = unsafe { CStr::from_ptr(ptr) };
        version.to_str().map(str::to_owned).map_err(|_| PluginError::InvalidVersion)
    }
}

fn read_failure(path: &str, code: c_int) -> PluginError {
    match code {
        STATUS_NULL_HANDLE => PluginError::NullHandle,
        _ => PluginError::HostCall { op: "read", path: path.to_owned(), code },
    }
}
