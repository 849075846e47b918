//! The option registry: declaration, lookup and parse-result queries.

use tracing::debug;

use crate::error::{ParseWarning, Result};
use crate::types::{Alias, ArgumentValue, Arity, Entry, Identifier, OptionSpec, Section};

/// Ordered collection of declared options and section headers.
///
/// The registry is built with the `add_*` methods, filled by
/// [`parse`](Registry::parse), and then queried. It does not detect duplicate
/// identifiers; run [`validate_registry`](crate::validate_registry) for that.
///
/// # Examples
///
/// ```
/// use cmdopts_core::{Arity, Registry};
///
/// let mut registry = Registry::new();
/// registry.add_section("General options:")?;
/// registry.add_option(Some('h'), Some("help"), Arity::NoArg, "print this help")?;
/// registry.add_option_with_default(Some('n'), Some("number"), Arity::SingleArg, "1", "a number")?;
/// registry.add_alias("help", Some('?'), None, "same as --help")?;
///
/// registry.parse(["-?", "input.txt"]).unwrap();
///
/// assert!(registry.was_provided("help"));
/// assert_eq!(registry.get_argument('n').and_then(|a| a.as_single()), Some("1"));
/// assert_eq!(registry.positional_parameters(), ["input.txt"]);
/// # Ok::<(), cmdopts_core::RegistryError>(())
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) entries: Vec<Entry>,
    pub(crate) positional: Vec<String>,
    pub(crate) warnings: Vec<ParseWarning>,
    pre_help: String,
    post_help: String,
    force_narrow: bool,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section header.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Allocation`](crate::RegistryError::Allocation)
    /// if the entry storage cannot grow.
    pub fn add_section(&mut self, name: &str) -> Result<()> {
        self.push_entry(Entry::Section(Section {
            name: name.to_string(),
        }))
    }

    /// Appends an option with no stored value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Allocation`](crate::RegistryError::Allocation)
    /// if the entry storage cannot grow.
    pub fn add_option(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        arity: Arity,
        help: &str,
    ) -> Result<()> {
        self.push_entry(Entry::Option(OptionSpec::new(short, long, arity, help)))
    }

    /// Appends an option whose stored value starts out as `default`.
    ///
    /// For [`Arity::MultiArg`] the default becomes the first element of the
    /// value list and command-line values are appended after it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Allocation`](crate::RegistryError::Allocation)
    /// if the entry storage cannot grow.
    pub fn add_option_with_default(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        arity: Arity,
        default: &str,
        help: &str,
    ) -> Result<()> {
        let mut option = OptionSpec::new(short, long, arity, help);
        option.argument = Some(match arity {
            Arity::MultiArg => ArgumentValue::Multi(vec![default.to_string()]),
            Arity::NoArg | Arity::SingleArg => ArgumentValue::Single(default.to_string()),
        });
        self.push_entry(Entry::Option(option))
    }

    /// Appends an alias forwarding to the first option whose long identifier
    /// is `target_long`.
    ///
    /// A missing target is not an error: the alias is kept as
    /// [`Alias::Unresolved`] and behaves as a switch of its own.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Allocation`](crate::RegistryError::Allocation)
    /// if the entry storage cannot grow.
    pub fn add_alias(
        &mut self,
        target_long: &str,
        short: Option<char>,
        long: Option<&str>,
        help: &str,
    ) -> Result<()> {
        let target = self
            .entries
            .iter()
            .position(|entry| {
                entry
                    .as_option()
                    .is_some_and(|option| option.matches(Identifier::Long(target_long)))
            })
            .map(|index| self.resolve(index));

        let mut alias = OptionSpec::new(short, long, Arity::NoArg, help);
        alias.alias = Some(match target {
            Some(index) => Alias::Resolved(index),
            None => {
                debug!(long = target_long, "alias target not declared, keeping it unresolved");
                Alias::Unresolved(target_long.to_string())
            }
        });
        self.push_entry(Entry::Option(alias))
    }

    /// Forces the help formatter into narrow mode.
    pub fn enable_narrow_mode(&mut self) {
        self.force_narrow = true;
    }

    /// Lets the help formatter pick the layout from the display width.
    pub fn disable_narrow_mode(&mut self) {
        self.force_narrow = false;
    }

    /// Returns `true` if narrow mode was forced.
    pub fn narrow_mode_forced(&self) -> bool {
        self.force_narrow
    }

    /// Appends `msg` to the text printed before the option list.
    pub fn prepend_help_message(&mut self, msg: &str) {
        self.pre_help.push_str(msg);
    }

    /// Appends `msg` to the text printed after the option list.
    pub fn append_help_message(&mut self, msg: &str) {
        self.post_help.push_str(msg);
    }

    /// Text printed before the option list.
    pub fn pre_help(&self) -> &str {
        &self.pre_help
    }

    /// Text printed after the option list.
    pub fn post_help(&self) -> &str {
        &self.post_help
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All declared options (aliases included) in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.entries.iter().filter_map(Entry::as_option)
    }

    /// Finds an option by short or long identifier, following aliases.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdopts_core::{Arity, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.add_option(Some('v'), Some("verbose"), Arity::NoArg, "")?;
    /// registry.add_alias("verbose", None, Some("debug"), "")?;
    ///
    /// let via_alias = registry.find("debug").unwrap();
    /// assert_eq!(via_alias.long.as_deref(), Some("verbose"));
    /// assert!(registry.find('x').is_none());
    /// # Ok::<(), cmdopts_core::RegistryError>(())
    /// ```
    pub fn find<'a>(&self, identifier: impl Into<Identifier<'a>>) -> Option<&OptionSpec> {
        self.find_index(identifier.into())
            .and_then(|index| self.entries[index].as_option())
    }

    /// Whether the option was given on the command line; `false` when the
    /// option is not declared.
    pub fn was_provided<'a>(&self, identifier: impl Into<Identifier<'a>>) -> bool {
        self.find(identifier).is_some_and(|option| {
            option.checked.set(true);
            option.was_provided()
        })
    }

    /// Stored argument of the option; `None` when the option is not declared
    /// or holds no value.
    pub fn get_argument<'a>(
        &self,
        identifier: impl Into<Identifier<'a>>,
    ) -> Option<&ArgumentValue> {
        self.find(identifier).and_then(|option| {
            option.checked.set(true);
            option.argument()
        })
    }

    /// Tokens that were neither options nor the `--` marker, in order.
    pub fn positional_parameters(&self) -> &[String] {
        &self.positional
    }

    /// Non-fatal diagnostics produced by the last parse.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Returns `true` if no declared option was provided.
    pub fn no_options_provided(&self) -> bool {
        !self.options().any(OptionSpec::was_provided)
    }

    /// Returns `true` once every provided option has been queried through
    /// [`was_provided`](Registry::was_provided) or
    /// [`get_argument`](Registry::get_argument).
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdopts_core::{Arity, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.add_option(Some('a'), None, Arity::NoArg, "")?;
    /// registry.add_option(Some('b'), None, Arity::NoArg, "")?;
    /// registry.parse(["-ab"]).unwrap();
    ///
    /// assert!(registry.was_provided('a'));
    /// assert!(!registry.all_options_checked());
    /// assert!(registry.was_provided('b'));
    /// assert!(registry.all_options_checked());
    /// # Ok::<(), cmdopts_core::RegistryError>(())
    /// ```
    pub fn all_options_checked(&self) -> bool {
        self.options()
            .filter(|option| option.was_provided())
            .all(|option| option.checked.get())
    }

    pub(crate) fn find_index(&self, identifier: Identifier<'_>) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| {
                entry
                    .as_option()
                    .is_some_and(|option| option.matches(identifier))
            })
            .map(|index| self.resolve(index))
    }

    /// Follows a resolved alias to its target. Targets are flattened when the
    /// alias is declared, so a single hop is enough.
    fn resolve(&self, index: usize) -> usize {
        match self.entries[index].as_option().and_then(OptionSpec::alias) {
            Some(Alias::Resolved(target)) => *target,
            _ => index,
        }
    }

    fn push_entry(&mut self, entry: Entry) -> Result<()> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        let mut registry = Registry::new();
        registry.add_section("General:").unwrap();
        registry
            .add_option(Some('h'), Some("help"), Arity::NoArg, "print help")
            .unwrap();
        registry
            .add_option(Some('n'), Some("number"), Arity::SingleArg, "a number")
            .unwrap();
        registry
            .add_option(None, Some("include"), Arity::MultiArg, "include path")
            .unwrap();
        registry
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let registry = sample();
        let kinds: Vec<&str> = registry
            .entries()
            .iter()
            .map(|entry| match entry {
                Entry::Section(_) => "section",
                Entry::Option(_) => "option",
            })
            .collect();
        assert_eq!(kinds, ["section", "option", "option", "option"]);
    }

    #[test]
    fn test_find_by_short_and_long_agree() {
        let registry = sample();
        let by_short = registry.find('n').unwrap();
        let by_long = registry.find("number").unwrap();
        assert!(std::ptr::eq(by_short, by_long));
    }

    #[test]
    fn test_find_missing_returns_none() {
        let registry = sample();
        assert!(registry.find('z').is_none());
        assert!(registry.find("zeta").is_none());
        assert!(!registry.was_provided("zeta"));
        assert!(registry.get_argument("zeta").is_none());
    }

    #[test]
    fn test_default_wrapping_depends_on_arity() {
        let mut registry = Registry::new();
        registry
            .add_option_with_default(Some('o'), None, Arity::SingleArg, "a.out", "")
            .unwrap();
        registry
            .add_option_with_default(Some('I'), None, Arity::MultiArg, "/usr/include", "")
            .unwrap();

        assert_eq!(
            registry.get_argument('o'),
            Some(&ArgumentValue::Single("a.out".into()))
        );
        assert_eq!(
            registry.get_argument('I'),
            Some(&ArgumentValue::Multi(vec!["/usr/include".into()]))
        );
    }

    #[test]
    fn test_alias_resolves_to_target() {
        let mut registry = sample();
        registry
            .add_alias("number", Some('N'), Some("num"), "alias")
            .unwrap();

        let target = registry.find("number").unwrap();
        assert!(std::ptr::eq(registry.find('N').unwrap(), target));
        assert!(std::ptr::eq(registry.find("num").unwrap(), target));
    }

    #[test]
    fn test_alias_chain_is_flattened() {
        let mut registry = sample();
        registry
            .add_alias("number", None, Some("num"), "first alias")
            .unwrap();
        registry
            .add_alias("num", None, Some("count"), "alias of alias")
            .unwrap();

        let found = registry.find("count").unwrap();
        assert_eq!(found.long.as_deref(), Some("number"));
        assert!(!found.is_alias());
    }

    #[test]
    fn test_unresolved_alias_is_kept() {
        let mut registry = sample();
        registry
            .add_alias("missing", Some('m'), None, "dangling")
            .unwrap();

        let option = registry.find('m').unwrap();
        assert_eq!(option.alias(), Some(&Alias::Unresolved("missing".into())));
        assert_eq!(option.arity, Arity::NoArg);
    }

    #[test]
    fn test_help_messages_concatenate() {
        let mut registry = Registry::new();
        registry.prepend_help_message("usage: demo ");
        registry.prepend_help_message("[options]");
        registry.append_help_message("see the manual");

        assert_eq!(registry.pre_help(), "usage: demo [options]");
        assert_eq!(registry.post_help(), "see the manual");
    }

    #[test]
    fn test_narrow_mode_toggle() {
        let mut registry = Registry::new();
        assert!(!registry.narrow_mode_forced());
        registry.enable_narrow_mode();
        assert!(registry.narrow_mode_forced());
        registry.disable_narrow_mode();
        assert!(!registry.narrow_mode_forced());
    }
}
