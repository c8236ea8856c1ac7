//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced while constructing `cm-core` values.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid location code {0:?}: expected exactly 3 uppercase letters or digits")]
    InvalidCode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
