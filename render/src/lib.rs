//! Help text, man page and description output for a
//! [`Registry`](cmdopts_core::Registry).
//!
//! - [`HelpFormatter`]: word-wrapped interactive help, switching between a
//!   wide two-column layout and a narrow stacked one based on the display
//!   width reported by a [`TerminalWidth`] provider.
//! - [`ManPage`] and [`export_options`]: roff markup for `man`.
//! - [`describe`]: JSON, YAML or Markdown descriptions of the declared
//!   entries.
//!
//! # Example
//!
//! ```
//! use cmdopts_core::{Arity, Registry};
//! use cmdopts_render::{HelpFormatter, HelpLayout};
//!
//! let mut registry = Registry::new();
//! registry.prepend_help_message("usage: demo [options]");
//! registry.add_option(Some('h'), Some("help"), Arity::NoArg, "print this help")?;
//!
//! let layout = HelpLayout { start_skip: 2, ..HelpLayout::default() };
//! let text = HelpFormatter::new(&registry)
//!     .with_layout(layout)
//!     .render_with_width(120);
//!
//! assert!(text.starts_with("usage: demo [options]\nlist of command line options:\n\n"));
//! assert!(text.contains("  -h, --help    print this help\n"));
//! # Ok::<(), cmdopts_core::RegistryError>(())
//! ```

mod error;
mod help;
mod layout;
mod manpage;
mod output;
mod terminal;

pub use error::{RenderError, Result};
pub use help::{HelpFormatter, OPTIONS_HEADING, option_column_width, wrap_paragraph};
pub use layout::{DEFAULT_NARROW_THRESHOLD, HelpLayout};
pub use manpage::{ManPage, escape_text, export_options, write_options};
pub use output::{OutputFormat, describe};
pub use terminal::{
    DEFAULT_DISPLAY_WIDTH, EnvWidth, FixedWidth, TerminalWidth, TtyWidth, display_width,
};
