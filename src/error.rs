use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum QuotamonError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Filesystem error at '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors from the filesystem size provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No filesystem matching '{0}' was found")]
    NotFound(String),

    #[error("Filesystem name '{name}' is ambiguous: matches {matches:?}")]
    Ambiguous { name: String, matches: Vec<String> },

    #[error("Failed to read mount table '{path}': {source}")]
    MountTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("statvfs failed for '{path}': {source}")]
    Statvfs {
        path: PathBuf,
        #[source]
        source: nix::Error,
    },
}

/// Errors from notification dispatch
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    #[error("Cannot derive a recipient from '{0}'")]
    InvalidRecipient(PathBuf),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Failed to render message: {0}")]
    Render(#[from] std::io::Error),

    #[error("Failed to notify {} recipient(s): {}", failed.len(), failed.join(", "))]
    PartialFailure { failed: Vec<String> },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, QuotamonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProviderError::NotFound("shared-efs".into());
        assert!(err.to_string().contains("shared-efs"));
    }

    #[test]
    fn error_conversion() {
        let provider_err = ProviderError::NotFound("x".into());
        let err: QuotamonError = provider_err.into();
        assert!(matches!(err, QuotamonError::Provider(_)));
    }

    #[test]
    fn partial_failure_lists_recipients() {
        let err = NotificationError::PartialFailure {
            failed: vec!["a@x.com".into(), "b@x.com".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 recipient"));
        assert!(msg.contains("a@x.com"));
    }
}
