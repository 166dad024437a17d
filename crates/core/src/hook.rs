//! Lifecycle hooks a native plugin can export
//!
//! The host calls each hook once with the plugin's handle.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Hook kinds triggered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HookKind {
    /// Menu initialization - the host has set up its menu state
    MenuInit,
    /// Client initialization - the host has set up a client session
    ClientInit,
}

impl HookKind {
    /// Returns the short label used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::MenuInit => "menu_init",
            Self::ClientInit => "client_init",
        }
    }
}

impl Display for HookKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
