//! Shared constants for the autorun plugin ABI.
//!
//! Symbol names and status codes agreed on with the host.

use std::ffi::c_int;

/// Host service: persist a file in the plugin's sandbox.
pub const WRITE_SYMBOL: &str = "autorun_write";

/// Host service: surface a message on the host console.
pub const PRINT_SYMBOL: &str = "autorun_print";

/// Host service: read a file from the plugin's sandbox into a buffer.
pub const READ_SYMBOL: &str = "autorun_read";

/// Host service: size in bytes of a file in the plugin's sandbox.
pub const READ_SIZE_SYMBOL: &str = "autorun_read_size";

/// Host service: create a directory (and parents) in the plugin's sandbox.
pub const MKDIR_SYMBOL: &str = "autorun_mkdir";

/// Host service: NUL-terminated host version string.
pub const VERSION_SYMBOL: &str = "autorun_version";

/// Host status: the call succeeded.
pub const STATUS_OK: c_int = 0;

/// Host status: the plugin handle was null.
pub const STATUS_NULL_HANDLE: c_int = -1;

/// Host status: the operation itself failed.
pub const STATUS_OPERATION_FAILED: c_int = -2;

/// Load order used when a manifest does not set one.
pub const DEFAULT_ORDERING: u32 = 9999;

/// Environment variable holding the default log level for plugin logging.
pub const LOG_LEVEL_ENV: &str = "AUTORUN_PLUGIN_LOG_LEVEL";
