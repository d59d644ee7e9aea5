use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// Every field has a default; sections or keys missing from YAML keep it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

/// Where content is served from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Document root, resolved against the working directory at startup
    pub root: String,
    /// Reject targets whose canonical path is outside the document root
    pub confine_to_root: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: "www".to_string(),
            confine_to_root: false,
        }
    }
}

impl Config {
    /// Defaults, with the listen address overridable through `LISTEN`.
    pub fn load() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies `LISTEN` on top of whatever was loaded, file or defaults.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(listen_addr) = std::env::var("LISTEN") {
            self.server.listen_addr = listen_addr;
        }
        self
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Invalid configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }
}
