//! Configuration loading
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! No setting changes the host: the listener is always bound to `127.0.0.1`.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::playerctl::DEFAULT_PROGRAM;
use crate::{Error, Result};

/// Listening port when nothing else is configured
pub const DEFAULT_PORT: u16 = 8553;

/// Environment variable overriding the port
pub const PORT_ENV: &str = "HASS_PLAYERCTL_PORT";

/// Environment variable overriding the playerctl executable
pub const PROGRAM_ENV: &str = "HASS_PLAYERCTL_BIN";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub playerctl: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            playerctl: PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}

impl Config {
    /// Loopback socket address for the configured port
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

/// Contents of `config.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub playerctl: Option<PathBuf>,
}

impl TomlConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Values supplied on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub port: Option<u16>,
    pub playerctl: Option<PathBuf>,
    /// Explicit config file; must exist and parse when given
    pub config_file: Option<PathBuf>,
}

/// Resolve the full configuration from all sources
pub fn resolve(overrides: &Overrides) -> Result<Config> {
    let toml_config = match &overrides.config_file {
        Some(path) => {
            let config = TomlConfig::load(path)?;
            info!("Loaded config file {}", path.display());
            config
        }
        None => match default_config_file() {
            Some(path) => match TomlConfig::load(&path) {
                Ok(config) => {
                    info!("Loaded config file {}", path.display());
                    config
                }
                Err(e) => {
                    // A broken default file must not stop the bridge from starting
                    warn!("{}; using defaults", e);
                    TomlConfig::default()
                }
            },
            None => {
                debug!("No config file found, using defaults");
                TomlConfig::default()
            }
        },
    };

    resolve_with(overrides, &toml_config)
}

/// Merge command line, environment and an already-loaded TOML config
pub fn resolve_with(overrides: &Overrides, toml_config: &TomlConfig) -> Result<Config> {
    let defaults = Config::default();

    let port = match overrides.port {
        Some(port) => port,
        None => env_port()?
            .or(toml_config.port)
            .unwrap_or(defaults.port),
    };

    let playerctl = overrides
        .playerctl
        .clone()
        .or_else(env_program)
        .or_else(|| toml_config.playerctl.clone())
        .unwrap_or(defaults.playerctl);

    Ok(Config { port, playerctl })
}

fn env_port() -> Result<Option<u16>> {
    match std::env::var(PORT_ENV) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{}={:?} is not a valid port", PORT_ENV, value))),
        _ => Ok(None),
    }
}

fn env_program() -> Option<PathBuf> {
    std::env::var_os(PROGRAM_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// First existing config file: user config dir, then `/etc`
pub fn default_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("hass-playerctl").join("config.toml"));
    let system_config = PathBuf::from("/etc/hass-playerctl/config.toml");

    user_config
        .into_iter()
        .chain(std::iter::once(system_config))
        .find(|path| path.exists())
}
