//! `plugin.toml` manifest shipped next to every plugin.
//!
//! ```toml
//! [plugin]
//! name = "test"
//! author = "autorun"
//! version = "0.1.0"
//! description = "Example native plugin"
//! language = "native"
//! ordering = 10
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ORDERING;
use crate::error::{PluginError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    pub plugin: ManifestPlugin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestPlugin {
    pub name: String,
    pub author: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    /// Lower values are loaded first.
    #[serde(default)]
    pub ordering: Option<u32>,
    pub language: PluginLanguage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum PluginLanguage {
    Lua,
    Native,
}

impl PluginManifest {
    /// Parses and validates a manifest.
    pub fn parse(source: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(source)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        let required =
            [("name", &self.plugin.name), ("author", &self.plugin.author), ("version", &self.plugin.version)];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PluginError::InvalidManifest(format!("plugin.{field} must not be empty")));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_ordering(&self) -> u32 {
        self.plugin.ordering.unwrap_or(DEFAULT_ORDERING)
    }

    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self.plugin.language, PluginLanguage::Native)
    }
}

impl FromStr for PluginManifest {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for PluginManifest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let plugin = &self.plugin;
        write!(f, "{} v{} by {}", plugin.name, plugin.version, plugin.author)
    }
}
