//! Error types for proxytag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for proxytag
#[derive(Debug, Error)]
pub enum ProxyTagError {
    /// The message does not carry a tag recognised by the matcher(s) tried.
    #[error("No proxy tag found")]
    NoMatch,

    #[error("Unknown match method: {0}")]
    UnknownMethod(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ProxyTagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ProxyTagError::NoMatch => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ProxyTagError::UnknownMethod(name) => {
                format!(
                    "Unknown match method: '{}'\n\n\
                    Valid methods:\n\
                    • sigils            [message]\n\
                    • half_sigil_start  [message\n\
                    • half_sigil_end    message]\n\n\
                    Example: proxytag --method sigils '[hello]'",
                    name
                )
            }
            ProxyTagError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path given to --config\n\
                    • Omit --config to use ./proxytag.toml or the built-in order",
                    path.display()
                )
            }
            ProxyTagError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\n\
                    Expected format:\n\
                    methods = [\"sigils\", \"half_sigil_start\", \"half_sigil_end\"]",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ProxyTagError
pub type Result<T> = std::result::Result<T, ProxyTagError>;
