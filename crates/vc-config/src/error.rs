use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("no configuration file to reload from")]
    NoPath,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
