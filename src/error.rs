use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Bundle directory {0} does not exist")]
    MissingBundle(PathBuf),

    #[error("Bundle directory has no index.html: {0}")]
    MissingIndex(PathBuf),
}
