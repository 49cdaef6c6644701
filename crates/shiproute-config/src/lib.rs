//! Configuration loading for shiproute.
//!
//! Reads `.env` (if present), then an optional `shiproute.toml` from the
//! current directory or the path in the `SHIPROUTE_CONFIG` env var, then the
//! chat-completion credential from the environment. The resulting `Config`
//! is immutable and shared for the lifetime of the process.

use std::net::SocketAddr;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "SHIPROUTE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "shiproute.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing credential: set the {var} environment variable (or add it to .env)")]
    MissingCredential { var: String },
    #[error("Config file not found: {0}")]
    FileNotFound(String),
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Fully resolved configuration, credential included.
#[derive(Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    api_key: SecretString,
}

/// Shape of `shiproute.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), static_dir: default_static_dir() }
    }
}

fn default_bind()       -> SocketAddr { SocketAddr::from(([127, 0, 0, 1], 3001)) }
fn default_static_dir() -> String     { "static".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_model()       -> String { "gpt-4o".to_string() }
fn default_base_url()    -> String { "https://api.openai.com".to_string() }
fn default_max_tokens()  -> u32    { 2048 }
fn default_temperature() -> f32    { 1.0 }
fn default_api_key_env() -> String { "OPENAI_API_KEY".to_string() }


impl Config {
    /// Load configuration from `.env`, `shiproute.toml` and the process environment.
    ///
    /// A missing default config file is fine (defaults apply); a missing file
    /// named explicitly by `SHIPROUTE_CONFIG` is an error. A missing credential
    /// is always an error.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }

        let explicit = std::env::var(CONFIG_PATH_VAR).ok();
        let path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let contents = if Path::new(&path).exists() {
            let text = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
            tracing::info!(path = %path, "Config file loaded");
            Some(text)
        } else if explicit.is_some() {
            return Err(ConfigError::FileNotFound(path));
        } else {
            None
        };

        Self::from_sources(contents.as_deref(), |var| std::env::var(var).ok())
    }

    /// Build a config from optional TOML text and an environment lookup.
    pub fn from_sources<F>(toml_text: Option<&str>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = match toml_text {
            Some(text) => toml::from_str(text)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, env)
    }

    fn resolve<F>(file: FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = file.llm.api_key_env.clone();
        let key = env(&var)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingCredential { var })?;

        Ok(Self {
            server: file.server,
            llm: file.llm,
            api_key: SecretString::from(key),
        })
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}
