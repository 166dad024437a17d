//! Drives the plugin hooks through the C function-pointer path of the SDK.

use std::ffi::{CStr, c_char, c_int, c_void};
use std::sync::Mutex;

use autorun_plugin_api::{AutorunApi, HookKind, HostFunctions, PluginHandle, run_hook};
use autorun_test_plugin::{
    MENU_STATUS_MESSAGE, autorun_client_init, autorun_menu_init, client_init, menu_init,
};
use serial_test::serial;

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostCall {
    Print(Vec<u8>),
    Write { handle: usize, path: Vec<u8>, content: Vec<u8>, content_len: usize },
}

static CALLS: Mutex<Vec<HostCall>> = Mutex::new(Vec::new());

fn record(call: HostCall) {
    CALLS.lock().unwrap_or_else(|e| e.into_inner()).push(call);
}

fn take_calls() -> Vec<HostCall> {
    std::mem::take(&mut *CALLS.lock().unwrap_or_else(|e| e.into_inner()))
}

unsafe extern "C" fn host_write(
    plugin_handle: *mut c_void,
    path: *const c_char,
    content: *const c_char,
    content_len: usize,
) -> c_int {
    // SAFETY: the SDK passes a NUL-terminated path and `content_len` readable bytes.
    let (path, content) = unsafe {
        (
            CStr::from_ptr(path).to_bytes().to_vec(),
            std::slice::from_raw_parts(content.cast::<u8>(), content_len).to_vec(),
        )
    };
    record(HostCall::Write { handle: plugin_handle as usize, path, content, content_len });
    0
}

unsafe extern "C" fn host_write_failing(
    _: *mut c_void,
    _: *const c_char,
    _: *const c_char,
    _: usize,
) -> c_int {
    record(HostCall::Print(b"<write rejected>".to_vec()));
    -2
}

unsafe extern "C" fn host_print(message: *const c_char) {
    // SAFETY: the SDK passes a NUL-terminated message.
    let message = unsafe { CStr::from_ptr(message) }.to_bytes().to_vec();
    record(HostCall::Print(message));
}

fn functions_with(write: autorun_plugin_api::WriteFn) -> HostFunctions {
    HostFunctions {
        write,
        print: Some(host_print),
        read: None,
        read_size: None,
        mkdir: None,
        version: None,
    }
}

fn api_with(write: autorun_plugin_api::WriteFn) -> AutorunApi {
    AutorunApi::from_functions(functions_with(write))
}

#[test]
#[serial]
fn test_client_init_writes_through_c_abi() {
    take_calls();
    let mut plugin_state = [0_u8; 4];
    let raw = plugin_state.as_mut_ptr().cast::<c_void>();

    client_init(&api_with(host_write), PluginHandle::from_raw(raw));

    assert_eq!(
        take_calls(),
        vec![HostCall::Write {
            handle: raw as usize,
            path: b"test.txt".to_vec(),
            content: b"This is a test file.\n".to_vec(),
            content_len: 21,
        }]
    );
}

#[test]
#[serial]
fn test_menu_init_prints_through_c_abi() {
    take_calls();
    menu_init(&api_with(host_write), PluginHandle::from_raw(0x1234 as *mut c_void));

    assert_eq!(take_calls(), vec![HostCall::Print(MENU_STATUS_MESSAGE.as_bytes().to_vec())]);
}

#[test]
#[serial]
fn test_both_hooks_via_run_hook() {
    take_calls();
    let api = api_with(host_write);
    let handle = PluginHandle::from_raw(0x40 as *mut c_void);

    run_hook(HookKind::MenuInit, &api, handle, |api, handle| menu_init(api, handle));
    run_hook(HookKind::ClientInit, &api, handle, |api, handle| client_init(api, handle));

    let calls = take_calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(&calls[0], HostCall::Print(m) if m == MENU_STATUS_MESSAGE.as_bytes()));
    assert!(matches!(&calls[1], HostCall::Write { handle: 0x40, content_len: 21, .. }));
}

#[test]
#[serial]
fn test_failed_write_is_not_retried() {
    take_calls();
    client_init(&api_with(host_write_failing), PluginHandle::from_raw(0x8 as *mut c_void));

    assert_eq!(take_calls(), vec![HostCall::Print(b"<write rejected>".to_vec())]);
}

#[test]
#[serial]
fn test_exported_entrypoints_without_host() {
    take_calls();
    let mut plugin_state = 0_u64;
    let raw = (&raw mut plugin_state).cast::<c_void>();

    autorun_menu_init(raw);
    autorun_client_init(raw);

    assert!(take_calls().is_empty());
}

#[test]
#[serial]
fn test_write_only_host_runs_client_init() {
    take_calls();
    let api = AutorunApi::from_functions(HostFunctions { print: None, ..functions_with(host_write) });
    let handle = PluginHandle::from_raw(0x20 as *mut c_void);

    menu_init(&api, handle);
    client_init(&api, handle);

    let calls = take_calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(&calls[0], HostCall::Write { handle: 0x20, content_len: 21, .. }));
}
