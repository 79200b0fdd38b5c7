//! Configuration system for the `TermTask` client.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/termtask/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use crate::net::SeedConfig;

/// Default remote seed endpoint.
pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The configured seed URL is not a valid URL.
    #[error("invalid seed URL {url:?}: {source}")]
    InvalidSeedUrl {
        /// The rejected value.
        url: String,
        /// Underlying parse error.
        source: url::ParseError,
    },
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    storage: StorageFileConfig,
    seed: SeedFileConfig,
    ui: UiFileConfig,
}

/// `[storage]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    data_file: Option<PathBuf>,
}

/// `[seed]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct SeedFileConfig {
    url: Option<String>,
    count: Option<usize>,
    fetch_timeout_secs: Option<u64>,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the task snapshot file.
    pub data_file: PathBuf,
    /// Remote seed endpoint.
    pub seed_url: String,
    /// How many leading seed payload elements to import.
    pub seed_count: usize,
    /// Overall timeout for the seed request.
    pub fetch_timeout: Duration,
    /// Poll timeout for the TUI event loop.
    pub poll_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_url: DEFAULT_SEED_URL.to_string(),
            seed_count: 5,
            fetch_timeout: Duration::from_secs(10),
            poll_timeout: Duration::from_millis(50),
        }
    }
}

impl AppConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// CLI args and env vars are parsed via `clap`. If `--config` is given
    /// and the file does not exist, returns an error. If no `--config` is
    /// given, the default path (`~/.config/termtask/config.toml`) is tried
    /// and silently ignored if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read
    /// or parsed, or if the resolved seed URL does not parse as a URL.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        let config = Self::resolve(cli, &file);
        config.validate()?;
        Ok(config)
    }

    /// Resolve an `AppConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. This is separated from `load()` to
    /// enable unit testing without CLI parsing.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            data_file: cli
                .data_file
                .clone()
                .or_else(|| file.storage.data_file.clone())
                .unwrap_or(defaults.data_file),
            seed_url: cli
                .seed_url
                .clone()
                .or_else(|| file.seed.url.clone())
                .unwrap_or(defaults.seed_url),
            seed_count: file.seed.count.unwrap_or(defaults.seed_count),
            fetch_timeout: file
                .seed
                .fetch_timeout_secs
                .map_or(defaults.fetch_timeout, Duration::from_secs),
            poll_timeout: file
                .ui
                .poll_timeout_ms
                .map_or(defaults.poll_timeout, Duration::from_millis),
        }
    }

    /// Reject values that would only fail later at fetch time.
    fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.seed_url).map_err(|source| ConfigError::InvalidSeedUrl {
            url: self.seed_url.clone(),
            source,
        })?;
        Ok(())
    }

    /// Build the [`SeedConfig`] for the startup import.
    #[must_use]
    pub fn to_seed_config(&self) -> SeedConfig {
        SeedConfig {
            url: self.seed_url.clone(),
            count: self.seed_count,
            timeout: self.fetch_timeout,
        }
    }
}

/// Default snapshot location: the platform data dir, or the temp dir on
/// platforms without one.
fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("termtask")
        .join("tasks.json")
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal-native task list manager")]
pub struct CliArgs {
    /// Path of the task snapshot file.
    #[arg(long, env = "TERMTASK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// URL of the remote seed endpoint.
    #[arg(long, env = "TERMTASK_SEED_URL")]
    pub seed_url: Option<String>,

    /// Path to config file (default: `~/.config/termtask/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TERMTASK_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/termtask.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            // No config dir available, use defaults.
            return Ok(ConfigFile::default());
        };
        config_dir.join("termtask").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
