//! Error types for impress-bibmodel

use thiserror::Error;

/// Result type alias for model and rendering operations
pub type Result<T> = std::result::Result<T, BibError>;

/// Errors raised while resolving values or rendering a bibliography
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BibError {
    /// A value references a string variable with no definition
    #[error("undefined string variable: {key}")]
    UndefinedVariable { key: String },

    /// A string variable expands (directly or transitively) to itself
    #[error("string variable refers to itself: {key}")]
    CyclicVariable { key: String },
}

impl BibError {
    /// The variable key the error is about
    pub fn key(&self) -> &str {
        match self {
            BibError::UndefinedVariable { key } | BibError::CyclicVariable { key } => key,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Value is out of its valid range
    #[error("Invalid config value: {0}")]
    InvalidValue(String),

    /// TOML could not be decoded into a config
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be encoded as TOML
    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// JSON could not be decoded or encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
