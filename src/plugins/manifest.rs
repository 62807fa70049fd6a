use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name of the plugin manifest, both remotely and on disk.
pub const PLUGIN_MANIFEST_FILE: &str = "plugins.toml";

/// A published artifact of a plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginRelease {
    pub os: String,
    pub arch: String,
    pub version: String,
    /// Checksum of the published artifact. Carried as data only; binary
    /// verification happens in the installer, not here.
    pub sum: String,
}

/// A single installable plugin as described by the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plugin {
    /// Unique-by-convention identifier used in commands and lookups.
    pub shortname: String,
    #[serde(default)]
    pub shortdesc: String,
    /// Base name of the plugin executable, without platform extension.
    pub binary: String,
    #[serde(default)]
    pub releases: Vec<PluginRelease>,
}

/// The decoded manifest: plugin entries in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginList {
    #[serde(rename = "plugin", default)]
    pub plugins: Vec<Plugin>,
}

impl PluginList {
    /// Decode manifest contents. `path` is only used for error reporting.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"
[[plugin]]
shortname = "linter"
shortdesc = "Lint project sources"
binary = "devkit-linter"

  [[plugin.releases]]
  os = "linux"
  arch = "amd64"
  version = "1.2.0"
  sum = "3d0f1e0c"

[[plugin]]
shortname = "deploy"
binary = "devkit-deploy"
"#;

    #[test]
    fn test_parse_manifest() {
        let list = PluginList::parse(SAMPLE, &PathBuf::from("plugins.toml")).unwrap();
        assert_eq!(list.len(), 2);

        let linter = &list.plugins[0];
        assert_eq!(linter.shortname, "linter");
        assert_eq!(linter.shortdesc, "Lint project sources");
        assert_eq!(linter.binary, "devkit-linter");
        assert_eq!(linter.releases.len(), 1);
        assert_eq!(linter.releases[0].version, "1.2.0");
        assert_eq!(linter.releases[0].sum, "3d0f1e0c");

        // defaults for omitted fields
        let deploy = &list.plugins[1];
        assert_eq!(deploy.shortdesc, "");
        assert!(deploy.releases.is_empty());
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let list = PluginList::parse(SAMPLE, &PathBuf::from("plugins.toml")).unwrap();
        let names: Vec<&str> = list.plugins.iter().map(|p| p.shortname.as_str()).collect();
        assert_eq!(names, ["linter", "deploy"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let list = PluginList::parse("", &PathBuf::from("plugins.toml")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_parse_malformed_manifest() {
        let err = PluginList::parse("[[plugin", &PathBuf::from("/cfg/plugins.toml")).unwrap_err();
        match err {
            Error::Manifest { path, .. } => {
                assert_eq!(path, PathBuf::from("/cfg/plugins.toml"));
            }
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_tolerates_unknown_keys() {
        let contents = r#"
[[plugin]]
shortname = "linter"
binary = "devkit-linter"
homepage = "https://example.com"
"#;
        let list = PluginList::parse(contents, &PathBuf::from("plugins.toml")).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_parse_missing_required_field() {
        let contents = r#"
[[plugin]]
shortdesc = "no shortname"
binary = "devkit-x"
"#;
        let err = PluginList::parse(contents, &PathBuf::from("plugins.toml")).unwrap_err();
        assert!(matches!(err, Error::Manifest { .. }));
    }
}
