use std::path::PathBuf;
use thiserror::Error;

/// Failures from the configuration layer, the one fallible surface outside
/// plain I/O. The calculator itself is total and never errors.
#[derive(Debug, Error)]
pub enum AdcalcError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
