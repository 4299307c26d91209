use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub server: Option<ServerConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Analyzer base endpoint, e.g. "http://localhost:8000".
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Theme name: "hacker" or "modern".
    pub theme: Option<String>,
}

/// Platform config directory path: `<config_dir>/flashdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("flashdeck").join("config.toml"))
}

/// Load config by cascading CWD `.flashdeck.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".flashdeck.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        server: Some(ServerConfig {
            endpoint: overlay
                .server
                .as_ref()
                .and_then(|s| s.endpoint.clone())
                .or_else(|| base.server.as_ref().and_then(|s| s.endpoint.clone())),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
    }
}

impl ConfigFile {
    pub fn endpoint(&self) -> Option<String> {
        self.server.as_ref().and_then(|s| s.endpoint.clone())
    }

    pub fn theme(&self) -> Option<String> {
        self.display.as_ref().and_then(|d| d.theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(endpoint: Option<&str>, theme: Option<&str>) -> ConfigFile {
        ConfigFile {
            server: Some(ServerConfig {
                endpoint: endpoint.map(String::from),
            }),
            display: Some(DisplayConfig {
                theme: theme.map(String::from),
            }),
        }
    }

    #[test]
    fn test_merge_overlay_wins() {
        let merged = merge(
            cfg(Some("http://base:1"), Some("hacker")),
            cfg(Some("http://cwd:2"), None),
        );
        assert_eq!(merged.endpoint().as_deref(), Some("http://cwd:2"));
        // Field absent in the overlay falls back to base
        assert_eq!(merged.theme().as_deref(), Some("hacker"));
    }

    #[test]
    fn test_merge_base_fills_missing_sections() {
        let merged = merge(cfg(Some("http://base:1"), None), ConfigFile::default());
        assert_eq!(merged.endpoint().as_deref(), Some("http://base:1"));
    }

    #[test]
    fn test_default_config_has_no_values() {
        let cfg = ConfigFile::default();
        assert!(cfg.endpoint().is_none());
        assert!(cfg.theme().is_none());
    }

    #[test]
    fn test_roundtrip_toml() {
        let original = cfg(Some("http://localhost:9000"), Some("modern"));
        let text = toml::to_string_pretty(&original).unwrap();
        let parsed: ConfigFile = toml::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }
}
