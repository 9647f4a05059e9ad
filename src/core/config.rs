//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pawlist/config.toml`. If missing on first run, a
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
pub struct PawConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ToastConfig {
    pub duration_ms: Option<u64>,
    pub adopt_message: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListConfig {
    pub scroll_animation: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Dog list";
pub const DEFAULT_TOAST_MS: u64 = 3500;
pub const DEFAULT_ADOPT_MESSAGE: &str = "Belong to you!";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub title: String,
    pub toast_ms: u64,
    pub adopt_message: String,
    pub scroll_animation: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&PawConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub toast_ms: Option<u64>,
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

/// Returns the path to `~/.pawlist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pawlist").join("config.toml"))
}

/// Load config from `~/.pawlist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PawConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PawConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PawConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PawConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. Unlike [`load_config`], a missing
/// file is an error here: the user asked for this file by name.
pub fn load_config_from(path: &Path) -> Result<PawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<PawConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# pawlist configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Dog list"

# [toast]
# duration_ms = 3500                 # Or set PAWLIST_TOAST_MS
# adopt_message = "Belong to you!"   # Or set PAWLIST_ADOPT_MESSAGE

# [list]
# scroll_animation = true            # Glide back to the top and fade between screens
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PawConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with the environment lookup supplied by the caller.
pub fn resolve_with_env(
    config: &PawConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Toast duration: CLI → env → config → default
    let toast_ms = cli
        .toast_ms
        .or_else(|| {
            env("PAWLIST_TOAST_MS").and_then(|raw| match raw.trim().parse() {
                Ok(ms) => Some(ms),
                Err(e) => {
                    warn!("Ignoring PAWLIST_TOAST_MS={:?}: {}", raw, e);
                    None
                }
            })
        })
        .or(config.toast.duration_ms)
        .unwrap_or(DEFAULT_TOAST_MS);

    // Adopt message: env → config → default
    let adopt_message = env("PAWLIST_ADOPT_MESSAGE")
        .or_else(|| config.toast.adopt_message.clone())
        .unwrap_or_else(|| DEFAULT_ADOPT_MESSAGE.to_string());

    ResolvedConfig {
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        toast_ms,
        adopt_message,
        scroll_animation: config.list.scroll_animation.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = PawConfig::default();
        assert!(config.general.title.is_none());
        assert!(config.toast.duration_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PawConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.title, DEFAULT_TITLE);
        assert_eq!(resolved.toast_ms, DEFAULT_TOAST_MS);
        assert_eq!(resolved.adopt_message, DEFAULT_ADOPT_MESSAGE);
        assert!(resolved.scroll_animation);
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PawConfig {
            general: GeneralConfig {
                title: Some("Shelter".to_string()),
            },
            toast: ToastConfig {
                duration_ms: Some(1000),
                adopt_message: Some("Yours now".to_string()),
            },
            list: ListConfig {
                scroll_animation: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.title, "Shelter");
        assert_eq!(resolved.toast_ms, 1000);
        assert_eq!(resolved.adopt_message, "Yours now");
        assert!(!resolved.scroll_animation);
    }

    #[test]
    fn test_env_beats_file_and_cli_beats_env() {
        let config = PawConfig {
            toast: ToastConfig {
                duration_ms: Some(1000),
                adopt_message: Some("from file".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "PAWLIST_TOAST_MS" => Some("2000".to_string()),
            "PAWLIST_ADOPT_MESSAGE" => Some("from env".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.toast_ms, 2000);
        assert_eq!(resolved.adopt_message, "from env");

        let cli = CliOverrides { toast_ms: Some(50) };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.toast_ms, 50);
    }

    #[test]
    fn test_malformed_env_duration_falls_through() {
        let config = PawConfig {
            toast: ToastConfig {
                duration_ms: Some(1234),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "PAWLIST_TOAST_MS").then(|| "soon".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.toast_ms, 1234);
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
title = "Adopt a dog"

[toast]
duration_ms = 800
adopt_message = "Good choice!"

[list]
scroll_animation = false
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.title.as_deref(), Some("Adopt a dog"));
        assert_eq!(config.toast.duration_ms, Some(800));
        assert_eq!(config.toast.adopt_message.as_deref(), Some("Good choice!"));
        assert_eq!(config.list.scroll_animation, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[toast]
duration_ms = 200
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.toast.duration_ms, Some(200));
        assert!(config.toast.adopt_message.is_none());
        assert!(config.general.title.is_none());
        assert!(config.list.scroll_animation.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[toast]\nduration_ms = \"long\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let path = std::env::temp_dir().join("pawlist-no-such-dir").join("config.toml");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_generated_default_config_loads_as_all_defaults() {
        let dir = std::env::temp_dir().join(format!("pawlist-default-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        generate_default_config(&path);
        let config = load_config_from(&path).unwrap();
        let _ = fs::remove_dir_all(&dir);

        assert!(config.general.title.is_none());
        assert!(config.toast.duration_ms.is_none());
        assert!(config.toast.adopt_message.is_none());
        assert!(config.list.scroll_animation.is_none());
    }
}
