//! # Configuration
//!
//! Centralizes menu appearance settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.menukit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenukitConfig {
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LabelConfig {
    pub quit: Option<String>,
    pub back: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RenderConfig {
    pub shortcut_style: Option<ShortcutStyle>,
}

/// How the default list renderer assigns shortcuts to rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutStyle {
    /// Sequential letters: a, b, ..., z, aa, ab, ...
    #[default]
    Alpha,
    /// 1-based numbers.
    Index,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_QUIT_LABEL: &str = "Exit";
pub const DEFAULT_BACK_LABEL: &str = "Back";
pub const DEFAULT_PROMPT: &str = "> ";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub quit_label: String,
    pub back_label: String,
    pub prompt: String,
    pub shortcut_style: ShortcutStyle,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menukit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menukit").join("config.toml"))
}

/// Load config from `~/.menukit/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MenukitConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MenukitConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenukitConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MenukitConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path (`--config` flag, tests).
pub fn load_config_from(path: &Path) -> Result<MenukitConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MenukitConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Menukit Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [labels]
# quit = "Exit"          # Title of a registered quit option
# back = "Back"          # Title of a registered back option
# prompt = "> "          # Shown before reading a selection

# [render]
# shortcut_style = "alpha"   # "alpha" (a, b, c...) or "index" (1, 2, 3...)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &MenukitConfig) -> ResolvedConfig {
    let quit_label = std::env::var("MENUKIT_QUIT_LABEL")
        .ok()
        .or_else(|| config.labels.quit.clone())
        .unwrap_or_else(|| DEFAULT_QUIT_LABEL.to_string());

    let back_label = std::env::var("MENUKIT_BACK_LABEL")
        .ok()
        .or_else(|| config.labels.back.clone())
        .unwrap_or_else(|| DEFAULT_BACK_LABEL.to_string());

    let prompt = std::env::var("MENUKIT_PROMPT")
        .ok()
        .or_else(|| config.labels.prompt.clone())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    let shortcut_style = std::env::var("MENUKIT_SHORTCUT_STYLE")
        .ok()
        .and_then(|raw| parse_shortcut_style(&raw))
        .or(config.render.shortcut_style)
        .unwrap_or_default();

    ResolvedConfig {
        quit_label,
        back_label,
        prompt,
        shortcut_style,
    }
}

/// Parses a shortcut style from an env var value, warning on garbage.
fn parse_shortcut_style(raw: &str) -> Option<ShortcutStyle> {
    match raw.trim().to_lowercase().as_str() {
        "alpha" => Some(ShortcutStyle::Alpha),
        "index" => Some(ShortcutStyle::Index),
        other => {
            warn!("Unknown shortcut style {other:?}, ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MenukitConfig::default();
        assert!(config.labels.quit.is_none());
        assert!(config.render.shortcut_style.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MenukitConfig::default();
        let resolved = resolve(&config);
        assert_eq!(resolved.quit_label, DEFAULT_QUIT_LABEL);
        assert_eq!(resolved.back_label, DEFAULT_BACK_LABEL);
        assert_eq!(resolved.prompt, DEFAULT_PROMPT);
        assert_eq!(resolved.shortcut_style, ShortcutStyle::Alpha);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MenukitConfig {
            labels: LabelConfig {
                quit: Some("Leave".to_string()),
                back: Some("Up".to_string()),
                prompt: Some(":: ".to_string()),
            },
            render: RenderConfig {
                shortcut_style: Some(ShortcutStyle::Index),
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.quit_label, "Leave");
        assert_eq!(resolved.back_label, "Up");
        assert_eq!(resolved.prompt, ":: ");
        assert_eq!(resolved.shortcut_style, ShortcutStyle::Index);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[labels]
quit = "Quit"
prompt = "? "

[render]
shortcut_style = "index"
"#;
        let config: MenukitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.labels.quit.as_deref(), Some("Quit"));
        assert_eq!(config.labels.back, None);
        assert_eq!(config.labels.prompt.as_deref(), Some("? "));
        assert_eq!(config.render.shortcut_style, Some(ShortcutStyle::Index));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[labels]
quit = "Leave"
"#;
        let config: MenukitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.labels.quit.as_deref(), Some("Leave"));
        assert!(config.labels.back.is_none());
        assert!(config.render.shortcut_style.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[labels]\nback = \"Return\"").unwrap();
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.labels.back.as_deref(), Some("Return"));
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "labels = \"not a table\"").unwrap();
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_shortcut_style_values() {
        assert_eq!(parse_shortcut_style("alpha"), Some(ShortcutStyle::Alpha));
        assert_eq!(parse_shortcut_style("INDEX"), Some(ShortcutStyle::Index));
        assert_eq!(parse_shortcut_style("roman"), None);
    }
}
