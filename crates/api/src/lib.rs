//! Plugin-side bindings for the autorun host
//!
//! The host exports its services (`autorun_write`, `autorun_print`, ...) as C
//! symbols. [`AutorunApi`] resolves them from the running process at call
//! time, so a plugin library links without the host present.
//!
//! ```rust,ignore
//! use autorun_plugin_api::prelude::*;
//!
//! fn on_menu(host: &impl HostServices, _handle: PluginHandle) {
//!     let _ = host.print("hello from my plugin\n");
//! }
//!
//! autorun_menu_entrypoint!(on_menu);
//! ```

mod dispatch;
mod host;
pub mod logging;

pub use autorun_plugin_core::{HookKind, HostServices, PluginError, PluginHandle, Result};
pub use dispatch::*;
pub use host::*;

/// Exports `$name` as a C hook that forwards to `$hook`.
#[macro_export]
macro_rules! autorun_entrypoint {
    ($hook:path, $kind:expr, $name:ident) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn $name(plugin_handle: *mut ::core::ffi::c_void) {
            $crate::dispatch($kind, $crate::PluginHandle::from_raw(plugin_handle), |api, handle| {
                $hook(api, handle)
            });
        }
    };
}

/// Exports `autorun_menu_init`, called when the host sets up its menu.
#[macro_export]
macro_rules! autorun_menu_entrypoint {
    ($hook:path) => {
        $crate::autorun_entrypoint!($hook, $crate::HookKind::MenuInit, autorun_menu_init);
    };
}

/// Exports `autorun_client_init`, called when the host sets up a client.
#[macro_export]
macro_rules! autorun_client_entrypoint {
    ($hook:path) => {
        $crate::autorun_entrypoint!($hook, $crate::HookKind::ClientInit, autorun_client_init);
    };
}

pub mod prelude {
    pub use crate::{
        AutorunApi, HookKind, HostServices, PluginError, PluginHandle, Result,
        autorun_client_entrypoint, autorun_menu_entrypoint,
    };
}
