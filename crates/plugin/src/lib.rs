//! Example native plugin for autorun
//!
//! Prints a status line when the host sets up its menu and writes
//! `test.txt` into the plugin's sandbox when a client is set up.

use std::sync::OnceLock;

use autorun_plugin_api::{autorun_client_entrypoint, autorun_menu_entrypoint};
use autorun_plugin_core::{PluginError, PluginManifest, Result};

pub mod hooks;

pub use hooks::{MENU_STATUS_MESSAGE, TEST_FILE_CONTENT, TEST_FILE_PATH, client_init, menu_init};

const MANIFEST_SOURCE: &str = include_str!("../plugin.toml");

static MANIFEST: OnceLock<Result<PluginManifest>> = OnceLock::new();

/// The `plugin.toml` shipped with this plugin, parsed on first use.
pub fn manifest() -> std::result::Result<&'static PluginManifest, &'static PluginError> {
    parse_once(&MANIFEST, MANIFEST_SOURCE)
}

fn parse_once(
    cell: &'static OnceLock<Result<PluginManifest>>,
    source: &str,
) -> std::result::Result<&'static PluginManifest, &'static PluginError> {
    cell.get_or_init(|| PluginManifest::parse(source)).as_ref()
}

autorun_menu_entrypoint!(hooks::menu_init);
autorun_client_entrypoint!(hooks::client_init);
