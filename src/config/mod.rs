//! TOML configuration for constructing a formatter outside of code.
//!
//! Every field carries a default, so a completely empty or missing config
//! file still produces the stock formatter.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::formatter::Formatter;

/// File-configurable subset of the formatter options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Clock segment on or off.
    pub timestamps: bool,
    /// Custom indent token; the built-in arrow gutter when absent.
    pub indent: Option<String>,
    /// Project folder name for `file` path shortening.
    pub root_folder: Option<String>,
    /// Container nesting depth for rendered values.
    pub object_depth: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            timestamps: true,
            indent: None,
            root_folder: None,
            object_depth: 2,
        }
    }
}

impl FormatConfig {
    /// Loads the config from the default location. A missing file is the
    /// default config.
    ///
    /// # Errors
    /// Fails when the config directory cannot be determined, the file
    /// cannot be read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads from an explicit path instead of the default location. A
    /// missing file is the default config.
    ///
    /// # Errors
    /// Read failures other than absence, and TOML syntax errors.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// `linefmt/config.toml` under the platform's user config directory.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn default_path() -> Result<PathBuf, Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("linefmt").join("config.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Builds a formatter with these options applied.
    #[must_use]
    pub fn formatter(&self) -> Formatter {
        let mut builder = Formatter::builder()
            .timestamps(self.timestamps)
            .object_depth(self.object_depth);
        if let Some(ref indent) = self.indent {
            builder = builder.indent(indent.clone());
        }
        if let Some(ref root) = self.root_folder {
            builder = builder.root_folder(root.clone());
        }
        builder.build()
    }
}
