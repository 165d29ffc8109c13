use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const BACKEND_URL_VAR: &str = "FINN_BACKEND_URL";
const LISTEN_VAR: &str = "FINN_LISTEN";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Authority the JSON API lives under, e.g. `http://localhost:8080`.
    pub(crate) backend_url: String,
    /// Address the dashboard listens on.
    pub(crate) listen: String,
    /// Stylesheet linked from every page. None links nothing.
    pub(crate) stylesheet: Option<String>,
    pub(crate) request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".to_string(),
            listen: "127.0.0.1:3000".to_string(),
            stylesheet: None,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Config file, then environment overrides.
    pub(crate) fn load() -> Result<Self> {
        let path = config_path()?;
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Read `path`; a missing file yields the defaults.
    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BACKEND_URL_VAR).filter(|v| !v.is_empty()) {
            self.backend_url = url;
        }
        if let Some(listen) = lookup(LISTEN_VAR).filter(|v| !v.is_empty()) {
            self.listen = listen;
        }
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

pub(crate) fn config_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "finn", "finn-dash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
