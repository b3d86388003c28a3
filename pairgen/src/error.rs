//! Error types for field pair generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pairgen operations
pub type Result<T> = std::result::Result<T, PairError>;

/// Errors that can occur while building field specs, sources or configuration.
///
/// Rendering a pair never fails; everything here happens before a generator
/// method is called.
#[derive(Debug, Error)]
pub enum PairError {
    /// A collection entry was neither a scalar nor a `[value, label]` pair
    #[error("malformed collection entry {entry}: expected a scalar or a [value, label] pair")]
    MalformedChoice { entry: String },

    /// A value that was expected to be an object (attribute record) was not
    #[error("cannot read attributes from a {kind}; expected an object")]
    NotARecord { kind: &'static str },

    /// Configuration file extension not recognised
    #[error("unsupported configuration file format: {path}")]
    UnsupportedConfigFormat { path: PathBuf },

    /// Configuration layering or extraction failed
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for PairError {
    fn from(error: figment::Error) -> Self {
        PairError::Config(Box::new(error))
    }
}
