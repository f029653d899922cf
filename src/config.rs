use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub smtp: SmtpConfig,
    pub check: CheckConfig,
}

/// SMTP relay settings for outgoing notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    /// Relay host
    pub host: String,
    /// Relay port
    pub port: u16,
    /// Username, if the relay requires authentication
    pub user: Option<String>,
    /// Password, if the relay requires authentication
    pub password: Option<String>,
    /// Negotiate STARTTLS with the relay
    pub starttls: bool,
}

/// Defaults for check runs; CLI arguments take precedence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Sender address for all notifications
    pub from: String,
    /// Operator recipient addresses
    pub operators: Vec<String>,
    /// Subject for operator notifications
    pub subject: String,
    /// Subject for individual user notifications
    pub user_subject: String,
    /// Decimal places when rendering sizes
    pub rounding: usize,
    /// Depth of user directories below the mount path
    pub depth: usize,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 25,
            user: None,
            password: None,
            starttls: false,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            from: "quota-alerts@example.com".to_string(),
            operators: vec![],
            subject: "Filesystem quota exceeded".to_string(),
            user_subject: "Directory over quota".to_string(),
            rounding: 1,
            depth: 1,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is used if present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(explicit) => Self::from_file(explicit),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Default config file location (`~/.config/quotamon/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quotamon").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
