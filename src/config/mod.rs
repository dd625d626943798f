mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Default bound on every backend request so the console never hangs
/// indefinitely on a dead backend.
pub const DEFAULT_REQUEST_TIMEOUT_SEC: u64 = 20;

const DEFAULT_SESSION_FILE: &str = "garage-session.json";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub backend_url: Option<String>,
    pub request_timeout_sec: u64,
    pub session_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            request_timeout_sec: DEFAULT_REQUEST_TIMEOUT_SEC,
            session_file: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the garage backend API.
    pub backend_url: String,
    /// Timeout applied uniformly to every backend request.
    pub request_timeout_sec: u64,
    /// Location of the durable session marker file.
    pub session_file: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let backend_url = file
            .backend_url
            .or_else(|| cli.backend_url.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("backend_url must be specified via --backend-url or in config file")
            })?;
        if backend_url.trim().is_empty() {
            bail!("backend_url must not be empty");
        }

        let request_timeout_sec = file
            .request_timeout_sec
            .unwrap_or(cli.request_timeout_sec);
        if request_timeout_sec == 0 {
            bail!("request_timeout_sec must be greater than zero");
        }

        let session_file = file
            .session_file
            .map(PathBuf::from)
            .or_else(|| cli.session_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        Ok(Self {
            backend_url,
            request_timeout_sec,
            session_file,
        })
    }
}
