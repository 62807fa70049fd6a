use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::requests::{API_VERSION, DEFAULT_API_BASE_URL, get_plugin_data};
use crate::{Error, Result, fetch};

use super::dirs;
use super::manifest::{PLUGIN_MANIFEST_FILE, Plugin, PluginList};

/// Access to the locally cached plugin manifest.
///
/// The manifest does not exist until first needed: a list request that finds
/// no file triggers one refresh from the backend, after which the on-disk
/// copy is the source of truth until the next explicit refresh. Every access
/// re-reads and re-decodes the file.
pub struct PluginStore<C: Config> {
    config: C,
    http: reqwest::Client,
    api_base_url: String,
    plugins_dir_override: Option<PathBuf>,
}

impl<C: Config> PluginStore<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            plugins_dir_override: None,
        }
    }

    /// Use a pre-built HTTP client instead of a fresh default one.
    pub fn with_http(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Point the lazy refresh at a different backend endpoint.
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    /// Override where plugin binaries are installed. A non-empty value takes
    /// precedence over the config-derived default but not over the
    /// environment variable, see [`plugins_dir`](Self::plugins_dir).
    pub fn with_plugins_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plugins_dir_override = Some(dir.into());
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// On-disk location of the plugin manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.config.config_folder().join(PLUGIN_MANIFEST_FILE)
    }

    /// Where plugin binaries are installed locally.
    pub fn plugins_dir(&self) -> PathBuf {
        dirs::plugins_dir(&self.config, self.plugins_dir_override.as_deref())
    }

    /// Read and decode the manifest, downloading it first if absent.
    ///
    /// A missing file triggers exactly one refresh attempt; a refresh
    /// failure propagates without any decode. Read errors other than
    /// "not found" propagate as-is.
    pub async fn plugin_list(&self) -> Result<PluginList> {
        let path = self.manifest_path();

        let contents = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "plugin manifest does not exist, downloading");
                if let Err(refresh_err) = self.refresh_manifest(&self.api_base_url).await {
                    tracing::debug!(error = %refresh_err, "could not download plugin manifest");
                    return Err(refresh_err);
                }
                tokio::fs::read(&path).await?
            }
            Err(e) => return Err(e.into()),
        };

        let text = std::str::from_utf8(&contents).map_err(|e| Error::Manifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        PluginList::parse(text, &path)
    }

    /// Return the manifest entry whose short name matches `name` exactly.
    ///
    /// Entries are scanned in file order; the first match wins. Matching is
    /// case-sensitive.
    pub async fn lookup_plugin(&self, name: &str) -> Result<Plugin> {
        let list = self.plugin_list().await?;

        list.plugins
            .into_iter()
            .find(|p| p.shortname == name)
            .ok_or_else(|| Error::PluginNotFound {
                name: name.to_string(),
            })
    }

    /// Re-download the manifest from the backend and replace the local copy.
    pub async fn refresh_manifest(&self, base_url: &str) -> Result<()> {
        let api_key = self.config.profile().api_key()?;

        let plugin_data = get_plugin_data(
            &self.http,
            base_url,
            API_VERSION,
            &api_key,
            self.config.profile(),
        )
        .await?;

        let manifest_url = format!("{}/{}", plugin_data.plugin_base_url, PLUGIN_MANIFEST_FILE);
        let body = fetch::fetch_remote_resource(&self.http, &manifest_url).await?;

        self.write_manifest(&self.manifest_path(), &body).await
    }

    async fn write_manifest(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, bytes).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644)).await?;
        }

        Ok(())
    }
}
