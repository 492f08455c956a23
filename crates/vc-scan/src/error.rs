use thiserror::Error;
use vc_config::ConfigError;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan configuration error: {0}")]
    Config(String),

    #[error("settings error: {0}")]
    Settings(#[from] ConfigError),
}

pub type ScanResult<T> = Result<T, ScanError>;
