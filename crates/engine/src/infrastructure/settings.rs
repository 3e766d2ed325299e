//! Editor settings loaded from the environment.

use std::path::PathBuf;

/// Default document location, named after the editor's storage key.
pub const DEFAULT_DOCUMENT_PATH: &str = "rpgData.json";

pub const DOCUMENT_PATH_VAR: &str = "TALEWRIGHT_DOCUMENT_PATH";
pub const PRETTY_JSON_VAR: &str = "TALEWRIGHT_PRETTY_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Where the campaign document lives.
    pub document_path: PathBuf,
    /// Write indented JSON instead of a single line.
    pub pretty_json: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            pretty_json: true,
        }
    }
}

impl EditorSettings {
    /// Create settings from environment variables.
    ///
    /// Uses `TALEWRIGHT_DOCUMENT_PATH` and `TALEWRIGHT_PRETTY_JSON`, falling
    /// back to defaults if not set. Unparseable booleans fall back too.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let document_path = lookup(DOCUMENT_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.document_path);
        let pretty_json = lookup(PRETTY_JSON_VAR)
            .and_then(|s| parse_bool(&s))
            .unwrap_or(defaults.pretty_json);

        Self {
            document_path,
            pretty_json,
        }
    }

    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = EditorSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, EditorSettings::default());
        assert_eq!(settings.document_path, PathBuf::from("rpgData.json"));
        assert!(settings.pretty_json);
    }

    #[test]
    fn reads_overrides() {
        let settings = EditorSettings::from_lookup(lookup(&[
            (DOCUMENT_PATH_VAR, "/tmp/campaign.json"),
            (PRETTY_JSON_VAR, "false"),
        ]));
        assert_eq!(settings.document_path, PathBuf::from("/tmp/campaign.json"));
        assert!(!settings.pretty_json);
    }

    #[test]
    fn blank_or_garbage_values_fall_back() {
        let settings = EditorSettings::from_lookup(lookup(&[
            (DOCUMENT_PATH_VAR, "  "),
            (PRETTY_JSON_VAR, "maybe"),
        ]));
        assert_eq!(settings, EditorSettings::default());
    }
}
