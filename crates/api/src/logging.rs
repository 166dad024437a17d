use std::sync::Once;

use autorun_plugin_core::env_config;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a stderr `tracing` subscriber for the plugin.
///
/// Runs at most once per process. The plugin library carries its own copy of
/// `tracing`, so this subscriber only sees events emitted by the plugin and
/// its SDK, never the host's.
pub fn init() {
    INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_filter(rust_log.as_deref(), env_config::log_level());
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .is_ok();
        tracing::debug!(installed, "plugin logging initialized");
    });
}

/// `RUST_LOG` directives when set and valid, otherwise `default_level`.
fn build_filter(rust_log: Option<&str>, default_level: LevelFilter) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level.to_string()))
}
