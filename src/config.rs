//! Service configuration: a small optional TOML file plus environment
//! overrides. A missing file is not an error; every value has a default.
//!
//! The scam-probability threshold and the heuristic constants are not
//! configurable here. They are fixed in code next to the logic they belong
//! to, matched to the shipped model artifacts.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::{env, fs};

pub const DEFAULT_CONFIG_PATH: &str = "config/yewo.toml";
pub const ENV_CONFIG_PATH: &str = "YEWO_CONFIG_PATH";
pub const ENV_HOST: &str = "YEWO_HOST";
pub const ENV_PORT: &str = "YEWO_PORT";
pub const ENV_MODEL_DIR: &str = "YEWO_MODEL_DIR";
pub const ENV_LOG_LEVEL: &str = "YEWO_LOG_LEVEL";

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}
fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelsConfig {
    #[serde(default = "default_model_dir")]
    pub dir: PathBuf,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: default_model_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Fallback log filter when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load from YEWO_CONFIG_PATH or `config/yewo.toml`, then apply env
    /// overrides. A missing file yields defaults; an unreadable or malformed
    /// file is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                anyhow::anyhow!("failed to read config at {}: {}", path.display(), e)
            })?;
            Self::from_toml_str(&content)
                .map_err(|e| anyhow::anyhow!("invalid config at {}: {}", path.display(), e))?
        } else {
            Self::default()
        };

        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    /// Parse from a TOML string. Public for tests.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(host) = env::var(ENV_HOST) {
            if !host.trim().is_empty() {
                self.server.host = host.trim().to_string();
            }
        }
        if let Ok(port) = env::var(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("{ENV_PORT} must be a port number, got {port:?}"))?;
        }
        if let Ok(dir) = env::var(ENV_MODEL_DIR) {
            if !dir.trim().is_empty() {
                self.models.dir = PathBuf::from(dir.trim());
            }
        }
        if let Ok(level) = env::var(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                self.telemetry.log_level = level.trim().to_string();
            }
        }
        Ok(())
    }

    /// Bind address for the HTTP server.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid listen host {:?}", self.server.host))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
