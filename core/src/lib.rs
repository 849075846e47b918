//! Command-line option registry and argv parser.
//!
//! This crate defines the foundational types for declaring and parsing
//! command-line options:
//!
//! - [`Registry`]: ordered collection of declared options and section
//!   headers, plus the parse results.
//! - [`OptionSpec`]: an option with short/long forms, an [`Arity`] and help
//!   text.
//! - [`ArgumentValue`]: the stored argument(s) of an option.
//! - [`Entry`]: a registry element, either a [`Section`] or an option.
//!
//! Parsing ([`Registry::parse`]) walks the argument list once, recording
//! which options were provided, their arguments, and positional parameters.
//!
//! Validation ([`validate_registry`]) catches declaration mistakes such as
//! duplicate identifiers and dangling aliases.
//!
//! # Example
//!
//! ```
//! use cmdopts_core::*;
//!
//! let mut registry = Registry::new();
//! registry.add_section("General options:")?;
//! registry.add_option(Some('h'), Some("help"), Arity::NoArg, "print this help")?;
//! registry.add_option(Some('I'), Some("include"), Arity::MultiArg, "add an include path")?;
//! registry.add_alias("include", None, Some("path"), "same as --include")?;
//!
//! registry.parse(["-I", "src", "--path", "lib", "--", "-h"]).unwrap();
//!
//! assert!(!registry.was_provided('h'));
//! assert_eq!(registry.get_argument("include").unwrap().values(), ["src", "lib"]);
//! assert_eq!(registry.positional_parameters(), ["-h"]);
//! assert!(validate_registry(&registry).is_empty());
//! # Ok::<(), RegistryError>(())
//! ```

mod error;
mod parser;
mod registry;
mod types;
mod validate;

pub use error::{ParseError, ParseWarning, RegistryError};
pub use registry::Registry;
pub use types::*;
pub use validate::{ValidationError, validate_registry};
