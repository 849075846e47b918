//! Registry validation.
//!
//! The registry accepts whatever it is given. This module is an opt-in check
//! that catches declarations which would make options unreachable or
//! ambiguous: options without identifiers, malformed identifiers, duplicates,
//! and aliases whose target was never declared.
//!
//! # Examples
//!
//! ```
//! use cmdopts_core::*;
//!
//! let mut registry = Registry::new();
//! registry.add_option(Some('v'), Some("verbose"), Arity::NoArg, "")?;
//! assert!(validate_registry(&registry).is_empty());
//!
//! registry.add_option(Some('v'), None, Arity::NoArg, "shadowed")?;
//! assert_eq!(
//!     validate_registry(&registry),
//!     vec![ValidationError::DuplicateShort('v')]
//! );
//! # Ok::<(), RegistryError>(())
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Alias, Registry};

/// Registry validation errors.
///
/// Each variant describes a declaration problem. The `Display` impl provides
/// a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An option has neither a short nor a long identifier.
    #[error("option must define a short or long identifier")]
    MissingIdentifier,
    /// Short identifier is not a printable, non-dash character.
    #[error("invalid short identifier: {0:?}")]
    InvalidShort(char),
    /// Long identifier is empty, starts with a dash, or contains whitespace.
    #[error("invalid long identifier: {0:?}")]
    InvalidLong(String),
    /// Two options share the same short identifier; only the first is
    /// reachable.
    #[error("duplicate short identifier: -{0}")]
    DuplicateShort(char),
    /// Two options share the same long identifier; only the first is
    /// reachable.
    #[error("duplicate long identifier: --{0}")]
    DuplicateLong(String),
    /// An alias points at a long identifier that was not declared before it.
    #[error("alias target not declared: --{0}")]
    UnresolvedAlias(String),
}

/// Validates every option in the registry.
///
/// Errors are reported in declaration order; all problems are collected.
pub fn validate_registry(registry: &Registry) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_short = HashSet::new();
    let mut seen_long = HashSet::new();

    for option in registry.options() {
        if option.short.is_none() && option.long.is_none() {
            errors.push(ValidationError::MissingIdentifier);
        }

        if let Some(short) = option.short {
            if short == '-' || short.is_whitespace() || short.is_control() {
                errors.push(ValidationError::InvalidShort(short));
            } else if !seen_short.insert(short) {
                errors.push(ValidationError::DuplicateShort(short));
            }
        }

        if let Some(long) = option.long.as_deref() {
            if long.is_empty() || long.starts_with('-') || long.chars().any(char::is_whitespace) {
                errors.push(ValidationError::InvalidLong(long.to_string()));
            } else if !seen_long.insert(long) {
                errors.push(ValidationError::DuplicateLong(long.to_string()));
            }
        }

        if let Some(Alias::Unresolved(target)) = option.alias() {
            errors.push(ValidationError::UnresolvedAlias(target.clone()));
        }
    }

    errors
}
