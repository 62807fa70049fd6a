//! Plugin manifest resolution and lookup.
//!
//! Installable plugins are described by a TOML manifest published alongside
//! the plugin artifacts and cached at `<config folder>/plugins.toml`:
//!
//! ```text
//! [[plugin]]
//! shortname = "linter"
//! shortdesc = "Lint project sources"
//! binary = "devkit-linter"
//!
//!   [[plugin.releases]]
//!   os = "linux"
//!   arch = "amd64"
//!   version = "1.2.0"
//!   sum = "3d0f1e0c"
//! ```
//!
//! [`PluginStore`] owns the read-or-download-then-decode cycle and lookups
//! by short name. [`ClientRegistry`] tracks the plugin-hosting runtime's
//! live connections so they can be torn down at process exit.

mod command;
mod dirs;
mod manifest;
mod runtime;
mod store;

pub use command::is_plugin_command;
pub use dirs::{PLUGINS_PATH_ENV, plugins_dir};
pub use manifest::{PLUGIN_MANIFEST_FILE, Plugin, PluginList, PluginRelease};
pub use runtime::{ClientRegistry, PluginClient};
pub use store::PluginStore;

/// File extension for plugin binaries on the host platform.
///
/// `".exe"` on Windows, empty elsewhere.
pub fn binary_extension() -> &'static str {
    if cfg!(windows) { ".exe" } else { "" }
}
