use std::sync::OnceLock;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::consts::{DEFAULT_LOG_LEVEL, DEFAULT_MOUNTPOINT, DEFAULT_ROOT};
use crate::Error;

/// The global config.
///
/// Once installed the config lives for the lifetime of the program and is never modified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    // We never need to resize these, so `Box<str>` saves us 1 * usize of space.
    #[serde(default = "default_root")]
    pub root: Box<str>,
    #[serde(default = "default_mountpoint")]
    pub mountpoint: Box<str>,
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Returns the path prefix the application is served under.
    #[inline]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the id of the element the application is mounted into.
    #[inline]
    pub fn mountpoint(&self) -> &str {
        &self.mountpoint
    }

    #[inline]
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Parses the config object passed from JavaScript. `undefined` and `null` yield the
    /// default config.
    pub fn from_js(value: JsValue) -> Result<Self, Error> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            mountpoint: default_mountpoint(),
            log_level: default_log_level(),
        }
    }
}

fn default_root() -> Box<str> {
    DEFAULT_ROOT.into()
}

fn default_mountpoint() -> Box<str> {
    DEFAULT_MOUNTPOINT.into()
}

fn default_log_level() -> LevelFilter {
    DEFAULT_LOG_LEVEL
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Returns the global config. If no config was set yet, the default config is installed and
/// returned.
#[inline]
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Sets the global config. This only succeeds once during the lifetime of the program and only
/// if [`config`] was not called before.
pub(crate) fn set_config(config: Config) -> Result<(), Error> {
    CONFIG.set(config).map_err(|_| Error::ConfigAlreadySet)
}
