use std::collections::HashMap;

const SCOPE_KEY: &str = "scope";
const PLUGIN_SCOPE: &str = "plugin";

/// Returns true if the invoked command is backed by a plugin.
///
/// Plugin-backed commands carry a `scope = plugin` annotation; dispatch
/// routes them to the plugin-hosting runtime instead of a built-in handler.
pub fn is_plugin_command(annotations: &HashMap<String, String>) -> bool {
    annotations
        .get(SCOPE_KEY)
        .is_some_and(|value| value == PLUGIN_SCOPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotations(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plugin_scope() {
        assert!(is_plugin_command(&annotations(&[("scope", "plugin")])));
    }

    #[test]
    fn test_core_scope() {
        assert!(!is_plugin_command(&annotations(&[("scope", "core")])));
    }

    #[test]
    fn test_no_annotations() {
        assert!(!is_plugin_command(&HashMap::new()));
    }

    #[test]
    fn test_unrelated_annotations() {
        let ann = annotations(&[("hidden", "true"), ("group", "plugin")]);
        assert!(!is_plugin_command(&ann));
    }
}
