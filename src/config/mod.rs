use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::SiteError;

pub const DEFAULT_PORT: u16 = 5004;
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Seconds a rendered page may be served from an external cache
pub const DEFAULT_REVALIDATE_SECS: u64 = 300;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub page_size: usize,
    pub revalidate_secs: u64,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            page_size: DEFAULT_PAGE_SIZE,
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }

    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, SiteError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw).map_err(|e| match e {
            SiteError::Config(message) => SiteError::parse(path.display().to_string(), message),
            other => other,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, SiteError> {
        let config: Config = toml::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `COCHI_*` environment overrides
    pub fn apply_env(&mut self) -> Result<(), SiteError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), SiteError> {
        if let Some(host) = lookup("COCHI_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("COCHI_PORT") {
            self.port = port
                .parse()
                .map_err(|_| SiteError::Config(format!("COCHI_PORT is not a port number: {}", port)))?;
        }
        if let Some(dir) = lookup("COCHI_CONTENT_DIR") {
            self.content_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("COCHI_STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.page_size == 0 {
            return Err(SiteError::Config("page_size must be at least 1".to_string()));
        }
        self.host
            .parse::<IpAddr>()
            .map_err(|_| SiteError::Config(format!("host is not an IP address: {}", self.host)))?;
        Ok(())
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, SiteError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| SiteError::Config(format!("host is not an IP address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
