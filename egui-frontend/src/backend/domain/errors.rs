//! Typed domain errors. Services still return `anyhow::Result` at their
//! boundaries; these enums carry the failures the UI needs to distinguish.

use thiserror::Error;

/// Record-store failures: bad input at the form boundary, or a lookup by id
/// that matched nothing.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

/// Import failures. A parse error means the file did not match the backup
/// schema; a validation error means it parsed but carried invalid content.
/// In every case the current store is left unchanged.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read backup file: {0}")]
    Io(#[from] std::io::Error),

    #[error("backup file does not match the expected format: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("backup content is invalid: {0}")]
    Validation(String),
}

/// Calculator expression errors.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("invalid number at position {pos}")]
    InvalidNumber { pos: usize },

    #[error("missing closing parenthesis")]
    UnbalancedParen,

    #[error("division by zero")]
    DivisionByZero,
}
