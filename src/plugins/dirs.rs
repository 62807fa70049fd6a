use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Environment variable overriding the local plugins directory.
pub const PLUGINS_PATH_ENV: &str = "DEVKIT_PLUGINS_PATH";

const PLUGINS_DIR_NAME: &str = "plugins";

/// Resolve where plugin binaries are installed locally.
///
/// Precedence: a non-empty `DEVKIT_PLUGINS_PATH` environment variable, then
/// a non-empty explicit override, then `<config folder>/plugins`. Pure
/// computation: the result is not checked for existence or writability.
pub fn plugins_dir(config: &impl Config, override_dir: Option<&Path>) -> PathBuf {
    resolve(
        std::env::var_os(PLUGINS_PATH_ENV).as_deref(),
        override_dir,
        &config.config_folder(),
    )
}

fn resolve(
    env_override: Option<&OsStr>,
    override_dir: Option<&Path>,
    config_folder: &Path,
) -> PathBuf {
    if let Some(env_dir) = env_override
        && !env_dir.is_empty()
    {
        return PathBuf::from(env_dir);
    }

    if let Some(dir) = override_dir
        && !dir.as_os_str().is_empty()
    {
        return dir.to_path_buf();
    }

    config_folder.join(PLUGINS_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn cfg() -> PathBuf {
        PathBuf::from("/home/dev/.config/devkit")
    }

    #[test]
    fn test_env_wins_over_everything() {
        let env = OsString::from("/env/plugins");
        let over = PathBuf::from("/override/plugins");
        let dir = resolve(Some(&env), Some(&over), &cfg());
        assert_eq!(dir, PathBuf::from("/env/plugins"));
    }

    #[test]
    fn test_override_wins_over_default() {
        let over = PathBuf::from("/override/plugins");
        let dir = resolve(None, Some(&over), &cfg());
        assert_eq!(dir, PathBuf::from("/override/plugins"));
    }

    #[test]
    fn test_env_wins_with_no_override() {
        let env = OsString::from("/env/plugins");
        let dir = resolve(Some(&env), None, &cfg());
        assert_eq!(dir, PathBuf::from("/env/plugins"));
    }

    #[test]
    fn test_default_is_config_derived() {
        let dir = resolve(None, None, &cfg());
        assert_eq!(dir, PathBuf::from("/home/dev/.config/devkit/plugins"));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let env = OsString::new();
        let over = PathBuf::new();
        let dir = resolve(Some(&env), Some(&over), &cfg());
        assert_eq!(dir, PathBuf::from("/home/dev/.config/devkit/plugins"));
    }
}
