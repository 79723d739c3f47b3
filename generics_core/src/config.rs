use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::metadata::LevelFilter;

use crate::logger::parse_level;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(io::Error),
    #[error(transparent)]
    Toml(toml::de::Error),
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: Logging,
    pub demos: Demos,
}

impl Config {
    pub fn from_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let mut file = File::open(path).map_err(ConfigError::Io)?;

        let mut buf = String::new();
        file.read_to_string(&mut buf).map_err(ConfigError::Io)?;

        Self::from_str(&buf)
    }

    /// Loads the config at `path`, or the default config if the file does not
    /// exist. Any other failure is returned.
    pub fn from_file_or_default<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        match Self::from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            res => res,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.logging.level()?;
        Ok(config)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logging {
    /// Maximum log level. `RUST_LOG` takes precedence if set.
    ///
    /// Defaults to `None` (`INFO`).
    pub level: Option<String>,
}

impl Logging {
    pub fn level(&self) -> Result<Option<LevelFilter>, ConfigError> {
        match &self.level {
            Some(level) => match parse_level(level) {
                Some(filter) => Ok(Some(filter)),
                None => Err(ConfigError::InvalidLevel(level.clone())),
            },
            None => Ok(None),
        }
    }
}

/// Inputs fed to the demos.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Demos {
    /// Factor passed to the variadic `scale` demo.
    pub scale_factor: f64,
    pub scale_values: Vec<f64>,
    /// Strings parsed by the `map` demo.
    pub numbers: Vec<String>,
    /// Text content of the list items created by the DOM demo.
    pub list_items: Vec<String>,
    pub padding: usize,
}

impl Default for Demos {
    fn default() -> Self {
        Self {
            scale_factor: 10.0,
            scale_values: vec![1.0, 2.0, 3.0, 4.0],
            numbers: vec!["1".to_owned(), "2".to_owned(), "3".to_owned()],
            list_items: vec!["Hello Worlds".to_owned(), "Habari Gani".to_owned()],
            padding: 4,
        }
    }
}
