//! Profile: a named credential set for the backend service.

use crate::{Error, Result};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "DEVKIT_API_KEY";

/// A named configuration profile.
///
/// Profiles let one machine hold credentials for several accounts; the plugin
/// subsystem only ever reads the active one.
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    api_key: Option<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_key: None,
        }
    }

    /// Attach a stored API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the API key without prompting.
    ///
    /// A non-empty `DEVKIT_API_KEY` wins over the key stored in the profile.
    /// Fails when neither is available.
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            return Ok(key);
        }

        self.api_key.clone().ok_or_else(|| {
            Error::auth(format!(
                "no API key configured for profile '{}'; run `devkit login`",
                self.name
            ))
        })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("default")
    }
}
