//! Core types for autorun native plugins
//!
//! This crate has no FFI of its own. It holds the types shared by the plugin
//! SDK and by plugins: the opaque handle, hook kinds, the host service trait,
//! errors and the `plugin.toml` manifest.

pub mod constants;
pub mod env_config;
mod error;
mod handle;
mod hook;
mod host;
mod manifest;

pub use error::*;
pub use handle::*;
pub use hook::*;
pub use host::*;
pub use manifest::*;
