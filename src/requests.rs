//! Requests against the devkit backend service.

use serde::Deserialize;

use crate::config::Profile;
use crate::{Error, Result};

/// Default production endpoint for the backend service.
pub const DEFAULT_API_BASE_URL: &str = "https://api.devkit.dev";

/// API version sent with every backend request.
pub const API_VERSION: &str = "2026-06-20";

const PLUGIN_DATA_PATH: &str = "/v1/cli/plugin_data";

/// Plugin distribution metadata returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginData {
    /// Base URL under which plugin artifacts and the manifest are published.
    pub plugin_base_url: String,
}

/// Request plugin distribution metadata from the backend service.
///
/// Authenticates with the profile's API key; the profile name is forwarded so
/// the backend can scope the response to the active account.
pub async fn get_plugin_data(
    http: &reqwest::Client,
    base_url: &str,
    api_version: &str,
    api_key: &str,
    profile: &Profile,
) -> Result<PluginData> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), PLUGIN_DATA_PATH);

    let response = http
        .get(&url)
        .bearer_auth(api_key)
        .header("Devkit-Api-Version", api_version)
        .header("Devkit-Profile", profile.name())
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(Error::Api {
            message,
            status: Some(status),
        });
    }

    let data = response.json::<PluginData>().await?;
    Ok(data)
}
