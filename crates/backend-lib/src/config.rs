// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Root directory for the document store
    pub data_dir: PathBuf,
    /// Directory of the static frontend
    pub static_dir: PathBuf,
    /// Log level
    pub log_level: String,
    /// Secret used to sign session tokens. The default is for local
    /// development only; set TASKBOARD_TOKEN_SECRET in any real deployment.
    pub token_secret: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".parse().unwrap(),
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            log_level: "info".to_string(),
            token_secret: "dev-secret-change-me".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, then `config.toml`, then
    /// `TASKBOARD_`-prefixed environment variables (highest precedence).
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load settings with an explicit config file path.
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("TASKBOARD_"))
            .extract()?;

        Ok(settings)
    }
}
