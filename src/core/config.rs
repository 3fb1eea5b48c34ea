//! # Configuration
//!
//! Override hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.todo-tui/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover the options.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::state::DraftPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub draft_policy: Option<DraftPolicy>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log file path; relative paths are resolved against `~/.todo-tui/`.
    pub file: Option<String>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const CONFIG_DIR_NAME: &str = ".todo-tui";
pub const DEFAULT_LOG_FILE_NAME: &str = "todo-tui.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_DRAFT_POLICY: &str = "TODO_TUI_DRAFT_POLICY";
pub const ENV_LOG_LEVEL: &str = "TODO_TUI_LOG";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub draft_policy: DraftPolicy,
    /// `None` when no home directory is known and no file was configured.
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "config I/O error ({}): {e}", path.display()),
            ConfigError::Parse(path, e) => {
                write!(f, "config parse error ({}): {e}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.todo-tui/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME))
}

/// Returns the path to `~/.todo-tui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Where the loaded config came from.
///
/// `load_config` runs before the file logger exists, so it reports what it
/// did here and the caller logs it once logging is up.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed(PathBuf, std::io::Error),
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed(path, e) => {
                warn!("Failed to write default config to {}: {e}", path.display())
            }
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load the config file.
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is used and a template is generated there if it is missing.
pub fn load_config(path: Option<&Path>) -> Result<(TodoConfig, ConfigSource), ConfigError> {
    if let Some(path) = path {
        return read_config(path);
    }

    let Some(path) = config_path() else {
        return Ok((TodoConfig::default(), ConfigSource::NoHomeDir));
    };

    if !path.exists() {
        let source = match generate_default_config(&path) {
            Ok(()) => ConfigSource::Generated(path),
            Err(e) => ConfigSource::GenerateFailed(path, e),
        };
        return Ok((TodoConfig::default(), source));
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<(TodoConfig, ConfigSource), ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let config: TodoConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# todo-tui configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# draft_policy = "keep"      # "keep" or "discard": what tabbing away from
#                            # "Add Todos" does to an unfinished entry.
#                            # Or set TODO_TUI_DRAFT_POLICY / --draft-policy.

# [log]
# file = "todo-tui.log"      # Relative to ~/.todo-tui/
# level = "info"             # off, error, warn, info, debug, trace
#                            # Or set TODO_TUI_LOG
"#;

/// Writes the commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TodoConfig, cli_draft_policy: Option<DraftPolicy>) -> ResolvedConfig {
    resolve_with_env(config, cli_draft_policy, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with the environment supplied by the caller.
pub fn resolve_with_env(
    config: &TodoConfig,
    cli_draft_policy: Option<DraftPolicy>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Draft policy: CLI → env → config → default
    let draft_policy = cli_draft_policy
        .or_else(|| env(ENV_DRAFT_POLICY).and_then(|v| parse_draft_policy(&v)))
        .or(config.general.draft_policy)
        .unwrap_or_default();

    // Log level: env → config → default; unparseable values fall through
    let log_level = env(ENV_LOG_LEVEL)
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .or_else(|| {
            config
                .log
                .level
                .as_deref()
                .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = resolve_log_file(config.log.file.as_deref(), config_dir());

    ResolvedConfig {
        draft_policy,
        log_file,
        log_level,
    }
}

fn parse_draft_policy(value: &str) -> Option<DraftPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "keep" => Some(DraftPolicy::Keep),
        "discard" => Some(DraftPolicy::Discard),
        _ => None,
    }
}

/// Absolute paths are used as-is; relative ones live under the config dir.
fn resolve_log_file(configured: Option<&str>, dir: Option<PathBuf>) -> Option<PathBuf> {
    match configured {
        Some(file) if Path::new(file).is_absolute() => Some(PathBuf::from(file)),
        Some(file) => Some(dir.map_or_else(|| PathBuf::from(file), |d| d.join(file))),
        None => dir.map(|d| d.join(DEFAULT_LOG_FILE_NAME)),
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
        let config = TodoConfig::default();
        assert!(config.general.draft_policy.is_none());
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&TodoConfig::default(), None, no_env);
        assert_eq!(resolved.draft_policy, DraftPolicy::Keep);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_config_values_override_defaults() {
        let config: TodoConfig = toml::from_str(
            r#"
[general]
draft_policy = "discard"

[log]
file = "/var/tmp/todo.log"
level = "debug"
"#,
        )
        .unwrap();
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.draft_policy, DraftPolicy::Discard);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, Some(PathBuf::from("/var/tmp/todo.log")));
    }

    #[test]
    fn test_env_overrides_config() {
        let config = TodoConfig {
            general: GeneralConfig {
                draft_policy: Some(DraftPolicy::Keep),
            },
            log: LogConfig {
                file: None,
                level: Some("warn".to_string()),
            },
        };
        let env = |key: &str| match key {
            ENV_DRAFT_POLICY => Some("Discard".to_string()),
            ENV_LOG_LEVEL => Some("trace".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, None, env);
        assert_eq!(resolved.draft_policy, DraftPolicy::Discard);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_cli_draft_policy_wins() {
        let env = |key: &str| (key == ENV_DRAFT_POLICY).then(|| "discard".to_string());
        let resolved = resolve_with_env(&TodoConfig::default(), Some(DraftPolicy::Keep), env);
        assert_eq!(resolved.draft_policy, DraftPolicy::Keep);
    }

    #[test]
    fn test_bad_env_values_fall_through() {
        let config = TodoConfig {
            log: LogConfig {
                file: None,
                level: Some("error".to_string()),
            },
            ..Default::default()
        };
        let env = |_: &str| Some("nonsense".to_string());
        let resolved = resolve_with_env(&config, None, env);
        assert_eq!(resolved.draft_policy, DraftPolicy::Keep);
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: TodoConfig = toml::from_str("[log]\nlevel = \"off\"\n").unwrap();
        assert!(config.general.draft_policy.is_none());
        assert_eq!(config.log.level.as_deref(), Some("off"));
    }

    #[test]
    fn test_unknown_draft_policy_is_parse_error() {
        let result: Result<TodoConfig, _> = toml::from_str("[general]\ndraft_policy = \"maybe\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_relative_log_file_lives_in_config_dir() {
        let dir = Some(PathBuf::from("/home/u/.todo-tui"));
        assert_eq!(
            resolve_log_file(Some("debug.log"), dir.clone()),
            Some(PathBuf::from("/home/u/.todo-tui/debug.log"))
        );
        assert_eq!(
            resolve_log_file(None, dir),
            Some(PathBuf::from("/home/u/.todo-tui/todo-tui.log"))
        );
        assert_eq!(resolve_log_file(None, None), None);
    }

    #[test]
    fn test_explicit_missing_config_is_io_error() {
        let err = load_config(Some(Path::new("/no/such/dir/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_explicit_config_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ndraft_policy = \"discard\"\n").unwrap();

        let (config, source) = load_config(Some(&path)).unwrap();
        assert_eq!(config.general.draft_policy, Some(DraftPolicy::Discard));
        assert!(matches!(source, ConfigSource::File(p) if p == path));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(p, _) if p == path));
    }

    #[test]
    fn test_generated_template_parses_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_default_config(&path).unwrap();

        let (config, _) = load_config(Some(&path)).unwrap();
        assert!(config.general.draft_policy.is_none());
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_generate_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        assert!(generate_default_config(&blocker.join("config.toml")).is_err());
    }
}
