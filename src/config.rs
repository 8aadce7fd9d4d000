use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::http::connection::DEFAULT_READ_LIMIT;
use crate::http::mime::FALLBACK_CONTENT_TYPE;
use crate::http::response::Headers;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "STATIC_SERVER_CONFIG";
/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

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
    /// Value of the `Server` header
    pub server_name: String,
    /// `Content-Type` sent unless a handler overrides it
    pub default_content_type: String,
    /// Bytes read from each connection
    pub read_buffer_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
    pub index_file: String,
    /// Write the directory listing page at startup
    pub generate_listing: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".to_string(),
            server_name: "StaticServer".to_string(),
            default_content_type: FALLBACK_CONTENT_TYPE.to_string(),
            read_buffer_size: DEFAULT_READ_LIMIT,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index_file: "index.html".to_string(),
            generate_listing: true,
        }
    }
}

impl ServerConfig {
    /// The header set every response starts from.
    pub fn default_headers(&self) -> Headers {
        [
            ("Server", self.server_name.as_str()),
            ("Content-Type", self.default_content_type.as_str()),
        ]
        .into_iter()
        .collect()
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Reads the YAML file named by `STATIC_SERVER_CONFIG` if set, then
    /// applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let listen = std::env::var(LISTEN_ENV).ok();
        Self::load_from(path.as_deref(), listen)
    }

    pub fn load_from(path: Option<&Path>, listen: Option<String>) -> anyhow::Result<Self> {
        let mut cfg = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                Self::from_yaml(&raw)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Some(listen) = listen {
            cfg.server.listen_addr = listen;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects values the server cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.read_buffer_size == 0 {
            anyhow::bail!("server.read_buffer_size must be greater than 0");
        }
        Ok(())
    }
}
