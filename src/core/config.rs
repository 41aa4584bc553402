//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.waypoint/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WaypointConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub restore: Option<bool>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub inset: Option<u16>,
    pub show_help: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "waypoint.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_INSET: u16 = 2;
const MAX_INSET: u16 = 8;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub restore: bool,
    pub state_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// A log level name that failed to parse; `log_level` holds the default.
    pub rejected_log_level: Option<String>,
    pub log_file: PathBuf,
    pub inset: u16,
    pub show_help: bool,
}

/// Values taken from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub restore: Option<bool>,
    pub log_level: Option<String>,
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

/// Returns `~/.waypoint`, where config and saved state live.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".waypoint"))
}

/// Returns the path to `~/.waypoint/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Where the loaded config came from. Config is loaded before the logger
/// exists, so the caller reports this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(p) => write!(f, "loaded config from {}", p.display()),
            ConfigSource::Generated(p) => write!(f, "generated default config at {}", p.display()),
            ConfigSource::Defaults => write!(f, "no home directory, using default config"),
        }
    }
}

/// Load config from an explicit path, or from `~/.waypoint/config.toml`.
///
/// An explicit path must exist. The default path is generated with
/// commented-out defaults when missing, and `WaypointConfig::default()` is
/// returned. Failing to write that file is a `ConfigError::Io`.
pub fn load_config(
    explicit: Option<&Path>,
) -> Result<(WaypointConfig, ConfigSource), ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return Ok((WaypointConfig::default(), ConfigSource::Defaults)),
        },
    };

    if explicit.is_none() && !path.exists() {
        generate_default_config(&path).map_err(ConfigError::Io)?;
        return Ok((WaypointConfig::default(), ConfigSource::Generated(path)));
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    Ok((config, ConfigSource::File(path)))
}

pub fn parse_config(contents: &str) -> Result<WaypointConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Waypoint Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# restore = false            # Reopen the last navigation path (WAYPOINT_RESTORE)
# log_level = "info"         # off, error, warn, info, debug, trace (WAYPOINT_LOG_LEVEL)
# log_file = "waypoint.log"  # Relative to the working directory (WAYPOINT_LOG_FILE)

# [ui]
# inset = 2                  # Cells each pushed screen is inset from the one below
# show_help = true           # Key hints at the bottom of the screen
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WaypointConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an explicit environment lookup.
pub fn resolve_with_env(
    config: &WaypointConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Restore: CLI → env → config → default
    let restore = cli
        .restore
        .or_else(|| env("WAYPOINT_RESTORE").and_then(|v| parse_bool(&v)))
        .or(config.general.restore)
        .unwrap_or(false);

    // Log level: CLI → env → config → default. Unknown names are kept for
    // the caller to report and the default is used.
    let requested_level = cli
        .log_level
        .clone()
        .or_else(|| env("WAYPOINT_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone());
    let (log_level, rejected_log_level) = match requested_level {
        Some(name) => match name.parse::<LevelFilter>() {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LOG_LEVEL, Some(name)),
        },
        None => (DEFAULT_LOG_LEVEL, None),
    };

    // Log file: env → config → default
    let log_file = env("WAYPOINT_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        restore,
        state_path: app_dir().map(|d| d.join("state.json")),
        log_level,
        rejected_log_level,
        log_file,
        inset: config.ui.inset.unwrap_or(DEFAULT_INSET).min(MAX_INSET),
        show_help: config.ui.show_help.unwrap_or(true),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = WaypointConfig::default();
        assert!(config.general.restore.is_none());
        assert!(config.ui.inset.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&WaypointConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.inset, DEFAULT_INSET);
        assert!(resolved.show_help);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = WaypointConfig {
            general: GeneralConfig {
                restore: Some(true),
                log_level: Some("debug".to_string()),
                log_file: None,
            },
            ui: UiConfig {
                inset: Some(4),
                show_help: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert!(resolved.restore);
        assert_eq!(resolved.inset, 4);
        assert!(!resolved.show_help);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = WaypointConfig {
            general: GeneralConfig {
                restore: Some(true),
                log_level: Some("debug".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            restore: Some(false),
            log_level: Some("trace".to_string()),
        };
        let resolved = resolve_with_env(&config, &cli, no_env);
        assert!(!resolved.restore);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let cli = CliOverrides {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&WaypointConfig::default(), &cli, no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.rejected_log_level.as_deref(), Some("chatty"));
    }

    #[test]
    fn test_known_log_level_is_not_rejected() {
        let cli = CliOverrides {
            log_level: Some("DEBUG".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&WaypointConfig::default(), &cli, no_env);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert!(resolved.rejected_log_level.is_none());
    }

    #[test]
    fn test_env_sits_between_config_and_cli() {
        let config = WaypointConfig {
            general: GeneralConfig {
                restore: Some(false),
                log_level: Some("info".to_string()),
                log_file: Some("from-config.log".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "WAYPOINT_RESTORE" => Some("yes".to_string()),
            "WAYPOINT_LOG_LEVEL" => Some("loud".to_string()),
            "WAYPOINT_LOG_FILE" => Some("from-env.log".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert!(resolved.restore);
        assert_eq!(resolved.log_file, PathBuf::from("from-env.log"));
        assert_eq!(resolved.rejected_log_level.as_deref(), Some("loud"));

        let cli = CliOverrides {
            restore: Some(false),
            log_level: Some("warn".to_string()),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert!(!resolved.restore);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert!(resolved.rejected_log_level.is_none());
    }

    #[test]
    fn test_inset_is_clamped() {
        let config = WaypointConfig {
            ui: UiConfig {
                inset: Some(200),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.inset, MAX_INSET);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
restore = true
log_level = "warn"
log_file = "/tmp/waypoint.log"

[ui]
inset = 3
show_help = false
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.restore, Some(true));
        assert_eq!(config.general.log_level.as_deref(), Some("warn"));
        assert_eq!(config.ui.inset, Some(3));
        assert_eq!(config.ui.show_help, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let config = parse_config("[ui]\ninset = 1\n").unwrap();
        assert_eq!(config.ui.inset, Some(1));
        assert!(config.general.restore.is_none());
        assert!(config.ui.show_help.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[ui]\ninset = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_explicit_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_explicit_path_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nrestore = true\n").unwrap();
        let (config, source) = load_config(Some(&path)).unwrap();
        assert_eq!(config.general.restore, Some(true));
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_generate_default_config_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        // The parent "directory" is a regular file
        assert!(generate_default_config(&blocker.join("config.toml")).is_err());
    }

    #[test]
    fn test_generated_default_config_parses_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".waypoint").join("config.toml");
        generate_default_config(&path).unwrap();

        let config = parse_config(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(config.general.restore.is_none());
        assert!(config.ui.inset.is_none());
    }

    #[test]
    fn test_parse_bool_variants() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
