//! Error types for termfolio.
//!
//! The interpreter core never fails; these errors cover the ambient layers
//! around it (configuration files, registry files, host I/O).

use std::io;

/// Errors produced outside the interpreter core.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
