//! Configuration management

use crate::domain::Method;
use crate::error::{ProxyTagError, Result};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "proxytag.toml";

/// Environment variable overriding the configured method order
pub const METHODS_ENV_VAR: &str = "PROXYTAG_METHODS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Matchers to try, highest priority first
    #[serde(default = "default_methods")]
    pub methods: Vec<Method>,
}

fn default_methods() -> Vec<Method> {
    Method::ALL.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            methods: default_methods(),
        }
    }
}

impl Config {
    /// Load config from an explicit file path. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProxyTagError::ConfigNotFound(path.to_path_buf())
            } else {
                ProxyTagError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from proxytag.toml in the given directory, falling back to
    /// the defaults when there is no such file.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_file(&path)
    }

    /// Apply the PROXYTAG_METHODS environment variable, if set
    pub fn with_env_override(self) -> Result<Self> {
        self.with_env_value(std::env::var(METHODS_ENV_VAR))
    }

    /// An unset or blank variable leaves the order unchanged
    fn with_env_value(self, value: std::result::Result<String, VarError>) -> Result<Self> {
        match value {
            Ok(value) if value.trim().is_empty() => Ok(self),
            Ok(value) => self.with_methods_override(&value),
            Err(VarError::NotPresent) => Ok(self),
            Err(VarError::NotUnicode(raw)) => Err(ProxyTagError::Config(format!(
                "{} is not valid Unicode: {:?}",
                METHODS_ENV_VAR, raw
            ))),
        }
    }

    /// Replace the method order with a comma-separated list of method names
    pub fn with_methods_override(self, value: &str) -> Result<Self> {
        let methods = value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse::<Method>)
            .collect::<Result<Vec<Method>>>()?;

        let config = Config { methods };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.methods.is_empty() {
            return Err(ProxyTagError::Config("methods list is empty".to_string()));
        }

        for (i, method) in self.methods.iter().enumerate() {
            if self.methods[..i].contains(method) {
                return Err(ProxyTagError::Config(format!(
                    "method '{}' listed more than once",
                    method
                )));
            }
        }

        Ok(())
    }
}
