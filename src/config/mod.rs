//! Configuration handle consumed by the plugin subsystem.
//!
//! The plugin layer is read-only with respect to configuration: it needs the
//! root configuration folder (where `plugins.toml` and the plugins directory
//! live) and the active profile's API key. Both are exposed through the
//! [`Config`] trait so tests and embedders can substitute their own source.

mod profile;

pub use profile::{API_KEY_ENV, Profile};

use std::ffi::OsStr;
use std::path::PathBuf;

use directories::BaseDirs;

/// Directory name under the platform configuration base.
pub const CONFIG_DIR_NAME: &str = "devkit";

/// Read-only view of the CLI configuration.
pub trait Config: Send + Sync {
    /// Root folder holding the CLI's configuration artifacts.
    fn config_folder(&self) -> PathBuf;

    /// The active profile.
    fn profile(&self) -> &Profile;
}

/// Compute the default configuration folder.
///
/// A non-empty `XDG_CONFIG_HOME` takes precedence as the base directory;
/// otherwise the platform configuration directory is used, falling back to a
/// home-relative `.config` when no home directory can be determined.
pub fn default_config_folder(xdg_config_home: Option<&OsStr>) -> PathBuf {
    let base = match xdg_config_home {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => BaseDirs::new()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".config")),
    };

    base.join(CONFIG_DIR_NAME)
}

/// Concrete [`Config`] backed by the process environment.
#[derive(Debug, Clone)]
pub struct CliConfig {
    config_folder: PathBuf,
    profile: Profile,
}

impl CliConfig {
    /// Create a config rooted at an explicit folder.
    pub fn new(config_folder: impl Into<PathBuf>, profile: Profile) -> Self {
        Self {
            config_folder: config_folder.into(),
            profile,
        }
    }

    /// Create a config whose folder is derived from `XDG_CONFIG_HOME`.
    pub fn from_env(profile: Profile) -> Self {
        let xdg = std::env::var_os("XDG_CONFIG_HOME");
        Self::new(default_config_folder(xdg.as_deref()), profile)
    }
}

impl Config for CliConfig {
    fn config_folder(&self) -> PathBuf {
        self.config_folder.clone()
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }
}
