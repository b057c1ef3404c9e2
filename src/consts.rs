//! Compile-time defaults for the runtime [`Config`].
//!
//! [`Config`]: crate::Config
use log::LevelFilter;

/// The path prefix used when the config doesn't define one. The application is served
/// directly under the origin.
pub const DEFAULT_ROOT: &str = "/";

/// The id of the html element the application is mounted into when the config doesn't
/// define one.
///
/// # Examples
///
/// Mount the application at the `<div id="app">` html tag.
/// ```html
/// <div id="app"></div>
/// ```
pub const DEFAULT_MOUNTPOINT: &str = "app";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
