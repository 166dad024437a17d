use std::ffi::{NulError, c_int};
use std::result::Result as StdResult;

use thiserror::Error;

use crate::constants::{STATUS_NULL_HANDLE, STATUS_OK};

/// Errors that can occur while talking to the autorun host
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Host rejected a null plugin handle")]
    NullHandle,

    #[error("Host {op} failed for '{path}' (status {code})")]
    HostCall { op: &'static str, path: String, code: c_int },

    #[error("String passed to the host contains a NUL byte: {0}")]
    InteriorNul(#[from] NulError),

    #[error("Host does not export {0}")]
    Unsupported(&'static str),

    #[error("Failed to resolve host symbol {symbol}: {reason}")]
    HostSymbol { symbol: &'static str, reason: String },

    #[error("Host returned an invalid version string")]
    InvalidVersion,

    #[error("Manifest parse error: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),
}

impl PluginError {
    /// Maps a status code returned by a host service to a result.
    ///
    /// `0` is success and `-1` means the host did not accept the handle.
    /// Every other value is reported as a failed operation.
    pub fn check_status(op: &'static str, path: &str, code: c_int) -> Result<()> {
        match code {
            STATUS_OK => Ok(()),
            STATUS_NULL_HANDLE => Err(Self::NullHandle),
            _ => Err(Self::HostCall { op, path: path.to_owned(), code }),
        }
    }
}

pub type Result<T> = StdResult<T, PluginError>;
