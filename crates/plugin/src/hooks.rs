//! Lifecycle hooks of the test plugin.
//!
//! Both hooks are fire-and-forget: a failed host call is logged and the hook
//! still returns normally.

use autorun_plugin_core::{HostServices, PluginHandle};

/// Message printed through the host when the menu is initialized.
pub const MENU_STATUS_MESSAGE: &str = "Test plugin menu initialized.\n";

/// File written through the host when a client is initialized.
pub const TEST_FILE_PATH: &str = "test.txt";

/// Contents of [`TEST_FILE_PATH`].
pub const TEST_FILE_CONTENT: &[u8] = b"This is a test file.\n";

/// Called once when the host sets up the menu.
pub fn menu_init<H: HostServices + ?Sized>(host: &H, _handle: PluginHandle) {
    log_manifest();
    if let Err(e) = host.print(MENU_STATUS_MESSAGE) {
        tracing::warn!(error = %e, "host print failed");
    }
}

/// Called once when the host sets up a client.
pub fn client_init<H: HostServices + ?Sized>(host: &H, handle: PluginHandle) {
    log_manifest();
    if let Err(e) = host.write(handle, TEST_FILE_PATH, TEST_FILE_CONTENT) {
        tracing::warn!(path = TEST_FILE_PATH, error = %e, "host write failed");
    }
}

fn log_manifest() {
    match crate::manifest() {
        Ok(manifest) => {
            tracing::debug!(plugin = %manifest, ordering = manifest.effective_ordering(), "running hook");
        },
        Err(e) => tracing::warn!(error = %e, "embedded plugin.toml is invalid"),
    }
}
