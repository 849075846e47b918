//! Option registry data model.
//!
//! A [`Registry`](crate::Registry) holds an ordered sequence of [`Entry`]
//! values: declared options interleaved with section headers. Keeping both in
//! a single sequence lets help output reproduce the declaration order,
//! section breaks included.

use std::cell::Cell;
use std::fmt;

use serde::Serialize;

/// How many argument values an option accepts.
///
/// # Examples
///
/// ```
/// use cmdopts_core::Arity;
///
/// assert!(!Arity::NoArg.takes_argument());
/// assert!(Arity::SingleArg.takes_argument());
/// assert!(Arity::MultiArg.is_repeatable());
/// assert_eq!(Arity::default(), Arity::NoArg);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Arity {
    /// Plain switch, no argument.
    #[default]
    NoArg,
    /// Exactly one argument; a later occurrence overwrites the value.
    SingleArg,
    /// One argument per occurrence; values accumulate in encounter order.
    MultiArg,
}

impl Arity {
    /// Returns `true` if the option consumes the following argv token.
    pub fn takes_argument(self) -> bool {
        !matches!(self, Arity::NoArg)
    }

    /// Returns `true` if the option may appear more than once without a
    /// warning.
    pub fn is_repeatable(self) -> bool {
        matches!(self, Arity::MultiArg)
    }
}

/// Stored argument of an option.
///
/// Single-argument options hold one string; multi-argument options hold every
/// value in the order it was seen on the command line.
///
/// # Examples
///
/// ```
/// use cmdopts_core::ArgumentValue;
///
/// let single = ArgumentValue::Single("5".into());
/// assert_eq!(single.as_single(), Some("5"));
/// assert_eq!(single.values(), ["5"]);
///
/// let multi = ArgumentValue::Multi(vec!["a".into(), "b".into()]);
/// assert_eq!(multi.as_single(), None);
/// assert_eq!(multi.values(), ["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Single(String),
    Multi(Vec<String>),
}

impl ArgumentValue {
    /// Returns the value of a single-argument option.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ArgumentValue::Single(value) => Some(value),
            ArgumentValue::Multi(_) => None,
        }
    }

    /// Returns all stored values as a slice (one element for `Single`).
    pub fn values(&self) -> &[String] {
        match self {
            ArgumentValue::Single(value) => std::slice::from_ref(value),
            ArgumentValue::Multi(values) => values,
        }
    }

    /// Returns the most recently stored value.
    pub fn last(&self) -> Option<&str> {
        self.values().last().map(String::as_str)
    }

    pub(crate) fn push(&mut self, value: String) {
        match self {
            ArgumentValue::Multi(values) => values.push(value),
            ArgumentValue::Single(previous) => {
                let previous = std::mem::take(previous);
                *self = ArgumentValue::Multi(vec![previous, value]);
            }
        }
    }
}

/// Lookup key for an option: its short character or its long name.
///
/// Accessors on [`Registry`](crate::Registry) take `impl Into<Identifier>`,
/// so both `'h'` and `"help"` can be passed directly.
///
/// # Examples
///
/// ```
/// use cmdopts_core::Identifier;
///
/// assert_eq!(Identifier::from('v'), Identifier::Short('v'));
/// assert_eq!(Identifier::from("verbose"), Identifier::Long("verbose"));
/// assert_eq!(Identifier::Long("verbose").to_string(), "--verbose");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Short(char),
    Long(&'a str),
}

impl From<char> for Identifier<'_> {
    fn from(short: char) -> Self {
        Identifier::Short(short)
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(long: &'a str) -> Self {
        Identifier::Long(long)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(long: &'a String) -> Self {
        Identifier::Long(long)
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Short(short) => write!(f, "-{short}"),
            Identifier::Long(long) => write!(f, "--{long}"),
        }
    }
}

/// Link from an alias option to the option it forwards to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Alias {
    /// Entry index of the target option (always a non-alias option).
    Resolved(usize),
    /// The target long name was not declared when the alias was added.
    Unresolved(String),
}

/// A declared command-line option.
///
/// Identity and help text are public; parse state (whether the option was
/// provided and its argument) is only written by
/// [`Registry::parse`](crate::Registry::parse) and read through accessors.
#[derive(Debug, Clone, Serialize)]
pub struct OptionSpec {
    /// Short form without the dash (e.g. `'v'`).
    pub short: Option<char>,
    /// Long form without the dashes (e.g. `"verbose"`).
    pub long: Option<String>,
    /// Number of arguments the option accepts.
    pub arity: Arity,
    /// Help text shown by the help formatter and man-page export.
    pub help: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) argument: Option<ArgumentValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) alias: Option<Alias>,
    #[serde(skip)]
    pub(crate) provided: bool,
    #[serde(skip)]
    pub(crate) checked: Cell<bool>,
}

impl OptionSpec {
    pub(crate) fn new(
        short: Option<char>,
        long: Option<&str>,
        arity: Arity,
        help: &str,
    ) -> Self {
        Self {
            short,
            long: long.map(String::from),
            arity,
            help: help.to_string(),
            argument: None,
            alias: None,
            provided: false,
            checked: Cell::new(false),
        }
    }

    /// Whether the option appeared on the command line.
    pub fn was_provided(&self) -> bool {
        self.provided
    }

    /// Stored argument: the default until parsing stores a value.
    pub fn argument(&self) -> Option<&ArgumentValue> {
        self.argument.as_ref()
    }

    /// Alias link, if this option was declared with
    /// [`Registry::add_alias`](crate::Registry::add_alias).
    pub fn alias(&self) -> Option<&Alias> {
        self.alias.as_ref()
    }

    /// Returns `true` if this option forwards to another one.
    pub fn is_alias(&self) -> bool {
        self.alias.is_some()
    }

    /// Checks if this option answers to the given identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdopts_core::{Arity, Identifier, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.add_option(Some('v'), Some("verbose"), Arity::NoArg, "be chatty")?;
    /// let option = registry.options().next().unwrap();
    /// assert!(option.matches(Identifier::Short('v')));
    /// assert!(option.matches(Identifier::Long("verbose")));
    /// assert!(!option.matches(Identifier::Long("v")));
    /// # Ok::<(), cmdopts_core::RegistryError>(())
    /// ```
    pub fn matches(&self, identifier: Identifier<'_>) -> bool {
        match identifier {
            Identifier::Short(short) => self.short == Some(short),
            Identifier::Long(long) => self.long.as_deref() == Some(long),
        }
    }

    /// Display label: `-x`, `--long` or `-x, --long`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdopts_core::{Arity, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.add_option(Some('n'), Some("number"), Arity::SingleArg, "")?;
    /// registry.add_option(None, Some("dry-run"), Arity::NoArg, "")?;
    /// registry.add_option(Some('q'), None, Arity::NoArg, "")?;
    ///
    /// let labels: Vec<String> = registry.options().map(|o| o.label()).collect();
    /// assert_eq!(labels, ["-n, --number", "--dry-run", "-q"]);
    /// # Ok::<(), cmdopts_core::RegistryError>(())
    /// ```
    pub fn label(&self) -> String {
        match (self.short, self.long.as_deref()) {
            (Some(short), Some(long)) => format!("-{short}, --{long}"),
            (Some(short), None) => format!("-{short}"),
            (None, Some(long)) => format!("--{long}"),
            (None, None) => String::new(),
        }
    }

    /// Name used in diagnostics: the long form when set, otherwise the short
    /// character.
    pub fn display_name(&self) -> String {
        match (self.long.as_deref(), self.short) {
            (Some(long), _) => long.to_string(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::new(),
        }
    }

    pub(crate) fn store(&mut self, value: String) {
        match (self.arity, self.argument.as_mut()) {
            (Arity::MultiArg, Some(existing)) => existing.push(value),
            (Arity::MultiArg, None) => self.argument = Some(ArgumentValue::Multi(vec![value])),
            _ => self.argument = Some(ArgumentValue::Single(value)),
        }
    }
}

/// A help-text section header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
}

/// One element of the registry sequence.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Section(Section),
    Option(OptionSpec),
}

impl Entry {
    /// Returns the option if this entry is one.
    pub fn as_option(&self) -> Option<&OptionSpec> {
        match self {
            Entry::Option(option) => Some(option),
            Entry::Section(_) => None,
        }
    }

    pub(crate) fn as_option_mut(&mut self) -> Option<&mut OptionSpec> {
        match self {
            Entry::Option(option) => Some(option),
            Entry::Section(_) => None,
        }
    }
}
