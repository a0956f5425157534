//! Configuration management for the admin file server
//!
//! All values here are startup configuration: they are loaded once during
//! server initialization and never change while requests are being served.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

fn default_max_command_length() -> usize {
    8192
}

/// Server configuration loaded from config.toml with environment overrides
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the admin listener
    pub bind_address: String,

    /// Port for the admin listener
    pub port: u16,

    /// Directory holding the configuration artifacts served by the handler
    pub config_dir: String,

    /// Packaged copy of the default configuration, used when config_dir is
    /// absent on disk
    #[serde(default)]
    pub packaged_dir: Option<String>,

    /// Filenames denied to the admin surface, matched case-insensitively.
    /// Absent or empty means no files are hidden.
    #[serde(default)]
    pub hidden: Vec<String>,

    /// Maximum accepted request line length
    #[serde(default = "default_max_command_length")]
    pub max_command_length: usize,
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("ADMIN_FILES").separator("_"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.config_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "config_dir cannot be empty".into(),
            ));
        }

        if self.max_command_length == 0 {
            return Err(config::ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as socket address
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get the configured config directory as PathBuf
    pub fn config_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.config_dir)
    }

    /// Get the packaged fallback directory as PathBuf, if configured
    pub fn packaged_dir_path(&self) -> Option<PathBuf> {
        self.packaged_dir.as_ref().map(PathBuf::from)
    }
}
