//! Error and diagnostic types for registry building and argv parsing.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while declaring entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Growing the entry storage failed.
    #[error("failed to allocate registry entry: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Fatal parse failures. Parsing stops at the offending token; state mutated
/// by earlier tokens is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `--name` token matched no declared long option.
    #[error("unknown command line option: '--{0}'")]
    UnknownOption(String),
    /// An option requiring an argument was the last token.
    #[error("expected argument for option '{0}'")]
    MissingArgument(String),
}

/// Non-fatal parse diagnostics, collected in
/// [`Registry::warnings`](crate::Registry::warnings).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// A non-repeatable option was given more than once.
    #[error("option '{0}' is only allowed once")]
    RepeatedOption(String),
}

/// Convenience alias for results with [`RegistryError`].
pub type Result<T> = std::result::Result<T, RegistryError>;
