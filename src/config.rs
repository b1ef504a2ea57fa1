//! Configuration for selector and constant naming

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{Error, Result};
use crate::pattern::DEFAULT_SELECTOR_PREFIX;
use crate::transform::{EscapeStyle, DEFAULT_CONSTANT_PREFIX};

/// Naming and formatting options for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Class prefix that marks an icon selector (default: `ri-`)
    pub selector_prefix: String,
    /// Prefix prepended to every constant name (default: `ICON_`)
    pub constant_prefix: String,
    /// Render bytes as `\x0a` instead of `\xa` (default: false)
    pub pad_escapes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector_prefix: DEFAULT_SELECTOR_PREFIX.to_string(),
            constant_prefix: DEFAULT_CONSTANT_PREFIX.to_string(),
            pad_escapes: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the defaults; an explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `$XDG_CONFIG_HOME/iconheader/iconheaderrc`, falling back to `~/.config`
    pub fn default_path() -> Option<PathBuf> {
        let path = config_path_from(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"));
        if path.is_none() {
            warn!("Neither XDG_CONFIG_HOME nor HOME is set; skipping default config file");
        }
        path
    }

    pub fn escape_style(&self) -> EscapeStyle {
        if self.pad_escapes {
            EscapeStyle::Padded
        } else {
            EscapeStyle::Unpadded
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::file_access(path, e))?;
        Self::parse(&contents)
    }

    /// Parse `key = value` lines; `#` starts a comment line
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::Config(format!("expected key = value, got: {}", line)));
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "selector_prefix" => {
                    if value.is_empty() {
                        return Err(Error::Config("selector_prefix must not be empty".into()));
                    }
                    config.selector_prefix = value.to_string();
                }
                "constant_prefix" => {
                    config.constant_prefix = value.to_string();
                }
                "pad_escapes" => {
                    config.pad_escapes = value
                        .parse()
                        .map_err(|_| Error::Config(format!("Invalid value for pad_escapes: {}", value)))?;
                }
                _ => {
                    warn!("Unknown config key: {}", key);
                }
            }
        }

        Ok(config)
    }

    /// Save configuration to a file, creating its directory if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::file_access(parent, e))?;
        }

        let contents = format!(
            "# iconheader configuration\n\
             \n\
             # Class prefix of icon selectors, e.g. .ri-home (default: ri-)\n\
             selector_prefix = {}\n\
             \n\
             # Prefix of generated constant names (default: ICON_)\n\
             constant_prefix = {}\n\
             \n\
             # Zero-pad byte escapes to two hex digits (default: false)\n\
             pad_escapes = {}\n",
            self.selector_prefix, self.constant_prefix, self.pad_escapes,
        );

        fs::write(path, contents).map_err(|e| Error::file_access(path, e))
    }
}

/// Resolve the rc path from the environment; empty values count as unset
fn config_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let config_dir = match (xdg_config_home, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg),
        (_, Some(home)) if !home.is_empty() => PathBuf::from(home).join(".config"),
        _ => return None,
    };

    Some(config_dir.join("iconheader").join("iconheaderrc"))
}
