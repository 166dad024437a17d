use std::panic::{self, AssertUnwindSafe};

use autorun_plugin_core::{HookKind, PluginHandle};

use crate::host::AutorunApi;
use crate::logging;

/// Runs a plugin hook on behalf of an exported entry point.
///
/// Nothing is reported back to the host: failures to resolve the host
/// services and panics inside `hook` are logged and dropped, so no unwind
/// ever crosses the C boundary.
pub fn dispatch<F>(kind: HookKind, handle: PluginHandle, hook: F)
where
    F: FnOnce(&AutorunApi, PluginHandle),
{
    logging::init();

    let api = match AutorunApi::load() {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(hook = %kind, error = %e, "host services unavailable, skipping hook");
            return;
        },
    };

    run_hook(kind, &api, handle, hook);
}

/// Runs `hook` against an already resolved API, containing panics.
pub fn run_hook<F>(kind: HookKind, api: &AutorunApi, handle: PluginHandle, hook: F)
where
    F: FnOnce(&AutorunApi, PluginHandle),
{
    let _span = tracing::debug_span!("hook", hook = %kind, handle = ?handle).entered();

    if panic::catch_unwind(AssertUnwindSafe(|| hook(api, handle))).is_err() {
        tracing::error!(hook = %kind, "plugin hook panicked");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::ffi::{c_char, c_int, c_void};

    use super::*;
    use crate::host::HostFunctions;

    unsafe extern "C" fn write_ok(_: *mut c_void, _: *const c_char, _: *const c_char, _: usize) -> c_int {
        0
    }

    unsafe extern "C" fn print_noop(_: *const c_char) {}

    fn api() -> AutorunApi {
        AutorunApi::from_functions(HostFunctions {
            write: write_ok,
            print: Some(print_noop),
            read: None,
            read_size: None,
            mkdir: None,
            version: None,
        })
    }

    #[test]
    fn test_run_hook_passes_handle() {
        let expected = PluginHandle::from_raw(0x42 as *mut c_void);
        let seen = Cell::new(None);
        run_hook(HookKind::MenuInit, &api(), expected, |_, handle| seen.set(Some(handle)));
        assert_eq!(seen.get(), Some(expected));
    }

    #[test]
    fn test_run_hook_contains_panic() {
        let handle = PluginHandle::from_raw(std::ptr::null_mut());
        run_hook(HookKind::ClientInit, &api(), handle, |_, _| panic!("boom"));
    }

    #[test]
    fn test_dispatch_without_host_is_silent() {
        let called = Cell::new(false);
        dispatch(HookKind::MenuInit, PluginHandle::from_raw(std::ptr::null_mut()), |_, _| called.set(true));
        assert!(!called.get());
    }
}
