//! # devkit-plugins
//!
//! Plugin manifest resolution and distribution for the devkit CLI.
//!
//! The CLI's installable plugins are described by a small TOML manifest
//! published alongside the plugin artifacts. This crate resolves that
//! manifest: it computes where it lives on disk, downloads it on first use,
//! decodes it, and answers lookups by plugin short name. Launching plugin
//! subprocesses is the job of the plugin-hosting runtime; this crate only
//! tracks its live clients so they can be torn down at process exit.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use devkit_plugins::{CliConfig, PluginStore, Profile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), devkit_plugins::Error> {
//!     let config = CliConfig::from_env(Profile::new("default"));
//!     let store = PluginStore::new(config);
//!
//!     let plugin = store.lookup_plugin("linter").await?;
//!     println!("{} {}", plugin.shortname, plugin.shortdesc);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod fetch;
pub mod plugins;
pub mod requests;

// Re-exports for convenience
pub use config::{CliConfig, Config, Profile};
pub use fetch::fetch_remote_resource;
pub use plugins::{
    ClientRegistry, PLUGINS_PATH_ENV, Plugin, PluginClient, PluginList, PluginRelease,
    PluginStore, binary_extension, is_plugin_command, plugins_dir,
};
pub use requests::{API_VERSION, DEFAULT_API_BASE_URL, PluginData};

use std::path::PathBuf;

/// Error type for devkit-plugins operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Backend service returned an error response.
    #[error("API error (HTTP {status}): {message}", status = status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".into()))]
    Api {
        message: String,
        status: Option<u16>,
    },

    /// Authentication failed.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Network connectivity or request failed.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A fetch target could not be parsed as a URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The plugin manifest could not be decoded.
    #[error("Invalid plugin manifest at {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    /// No manifest entry matches the queried short name.
    #[error("Could not find a plugin named {name}")]
    PluginNotFound { name: String },
}

impl Error {
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }

    /// Whether this error is a missing-file read, the condition that
    /// triggers a manifest refresh rather than immediate failure.
    pub fn is_not_found_io(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type for devkit-plugins operations.
pub type Result<T> = std::result::Result<T, Error>;
